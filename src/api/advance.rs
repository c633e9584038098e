use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::db;
use crate::error::ApiResult;
use crate::model::advance::{Advance, CreateAdvance};

/// Advances requested by one employee
#[utoipa::path(
    get,
    path = "/api/advances/{employee_code}",
    params(
        ("employee_code", Path, description = "Employee code")
    ),
    responses(
        (status = 200, description = "Advances for the employee, possibly empty", body = [Advance]),
        (status = 500, description = "Storage failure")
    ),
    tag = "Advance"
)]
pub async fn list_advances(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let advances = db::advance::list_by_employee(pool.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(advances))
}

/// Request an advance
#[utoipa::path(
    post,
    path = "/api/advances",
    request_body = CreateAdvance,
    responses(
        (status = 201, description = "Advance recorded", body = Advance),
        (status = 500, description = "Storage failure")
    ),
    tag = "Advance"
)]
pub async fn create_advance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateAdvance>,
) -> ApiResult<HttpResponse> {
    let advance = db::advance::create(pool.get_ref(), payload.into_inner().with_defaults()).await?;
    Ok(HttpResponse::Created().json(advance))
}
