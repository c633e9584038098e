use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};
use crate::model::employee::{Employee, NewEmployee};

pub async fn list(pool: &SqlitePool) -> StoreResult<Vec<Employee>> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees")
        .fetch_all(pool)
        .await
        .map_err(StoreError::storage("fetch employees"))
}

/// `Ok(None)` when no employee has this code.
pub async fn find_by_code(pool: &SqlitePool, code: &str) -> StoreResult<Option<Employee>> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE code = ?")
        .bind(code)
        .fetch_optional(pool)
        .await
        .map_err(StoreError::storage("fetch employee"))
}

pub async fn create(pool: &SqlitePool, employee: NewEmployee) -> StoreResult<Employee> {
    sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees
            (code, name, basic_salary, job_title, hire_date,
             monthly_incentives, work_days, daily_work_hours, status)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(employee.code)
    .bind(employee.name)
    .bind(employee.basic_salary)
    .bind(employee.job_title)
    .bind(employee.hire_date)
    .bind(employee.monthly_incentives)
    .bind(employee.work_days)
    .bind(employee.daily_work_hours)
    .bind(employee.status)
    .fetch_one(pool)
    .await
    .map_err(StoreError::storage("create employee"))
}
