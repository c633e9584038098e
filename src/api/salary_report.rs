use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::db;
use crate::error::ApiResult;
use crate::model::salary_report::{CreateSalaryReport, SalaryReport};

#[utoipa::path(
    get,
    path = "/api/salary-reports/{employee_code}",
    params(
        ("employee_code", Path, description = "Employee code")
    ),
    responses(
        (status = 200, description = "Salary reports for the employee", body = [SalaryReport]),
        (status = 500, description = "Storage failure")
    ),
    tag = "Salary Report"
)]
pub async fn list_salary_reports(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let reports = db::salary_report::list_by_employee(pool.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(reports))
}

/// Store a computed salary report. `gross_salary` and `net_salary` are required.
#[utoipa::path(
    post,
    path = "/api/salary-reports",
    request_body = CreateSalaryReport,
    responses(
        (status = 201, description = "Salary report stored", body = SalaryReport),
        (status = 500, description = "Storage failure", body = Object, example = json!({
            "error": "Failed to create salary report: NOT NULL constraint failed: salary_records.gross_salary"
        }))
    ),
    tag = "Salary Report"
)]
pub async fn create_salary_report(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateSalaryReport>,
) -> ApiResult<HttpResponse> {
    let report =
        db::salary_report::create(pool.get_ref(), payload.into_inner().with_defaults()).await?;
    Ok(HttpResponse::Created().json(report))
}
