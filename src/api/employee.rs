use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;
use tracing::debug;

use crate::db;
use crate::error::{ApiError, ApiResult};
use crate::model::employee::{CreateEmployee, Employee};

/// List employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Storage failure", body = Object, example = json!({
            "error": "Failed to fetch employees: ..."
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> ApiResult<HttpResponse> {
    let employees = db::employee::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get employee by code
#[utoipa::path(
    get,
    path = "/api/employees/{code}",
    params(
        ("code", Path, description = "Employee code")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "error": "Employee not found"
        })),
        (status = 500, description = "Storage failure")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let code = path.into_inner();

    match db::employee::find_by_code(pool.get_ref(), &code).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => {
            debug!(code = %code, "Employee lookup missed");
            Err(ApiError::NotFound("Employee"))
        }
    }
}

/// Create employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 500, description = "Storage failure", body = Object, example = json!({
            "error": "Failed to create employee: UNIQUE constraint failed: employees.code"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> ApiResult<HttpResponse> {
    let employee = db::employee::create(pool.get_ref(), payload.into_inner().with_defaults()).await?;
    Ok(HttpResponse::Created().json(employee))
}
