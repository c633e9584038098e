use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};
use crate::model::salary_report::{NewSalaryReport, SalaryReport};

pub async fn list_by_employee(
    pool: &SqlitePool,
    employee_code: &str,
) -> StoreResult<Vec<SalaryReport>> {
    sqlx::query_as::<_, SalaryReport>("SELECT * FROM salary_records WHERE employee_code = ?")
        .bind(employee_code)
        .fetch_all(pool)
        .await
        .map_err(StoreError::storage("fetch salary reports"))
}

pub async fn create(pool: &SqlitePool, report: NewSalaryReport) -> StoreResult<SalaryReport> {
    sqlx::query_as::<_, SalaryReport>(
        r#"
        INSERT INTO salary_records
            (employee_code, month, basic_salary, monthly_incentives, bonus,
             overtime_hours, overtime_amount, work_days, absence_days, penalty_days,
             allowances, deductions_purchases, deductions_advances, deductions_absence,
             deductions_hourly, deductions_penalties, total_deductions,
             gross_salary, net_salary, payment_status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(report.employee_code)
    .bind(report.month)
    .bind(report.basic_salary)
    .bind(report.monthly_incentives)
    .bind(report.bonus)
    .bind(report.overtime_hours)
    .bind(report.overtime_amount)
    .bind(report.work_days)
    .bind(report.absence_days)
    .bind(report.penalty_days)
    .bind(report.allowances)
    .bind(report.deductions_purchases)
    .bind(report.deductions_advances)
    .bind(report.deductions_absence)
    .bind(report.deductions_hourly)
    .bind(report.deductions_penalties)
    .bind(report.total_deductions)
    .bind(report.gross_salary)
    .bind(report.net_salary)
    .bind(report.payment_status)
    .fetch_one(pool)
    .await
    .map_err(StoreError::storage("create salary report"))
}
