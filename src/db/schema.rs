use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

const SCHEMA: &str = include_str!("../../schema/schema.sql");

/// Creates the payroll tables when the `employees` table is absent.
/// Returns `true` when the schema script was executed.
pub async fn initialize(pool: &SqlitePool) -> Result<bool> {
    let existing = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'employees'")
        .fetch_optional(pool)
        .await
        .context("failed to inspect sqlite_master")?;

    if existing.is_some() {
        debug!("Schema already present, skipping initialization");
        return Ok(false);
    }

    info!("Initializing database schema...");
    for statement in statements(SCHEMA) {
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| format!("failed to execute schema statement: {statement}"))?;
    }
    info!("Database schema initialized successfully");
    Ok(true)
}

fn statements(script: &str) -> impl Iterator<Item = &str> {
    script.split(';').map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaReport {
    pub employee_columns: Vec<String>,
    pub employee_count: i64,
}

/// Column layout of `employees` and its row count, logged at startup.
pub async fn describe(pool: &SqlitePool) -> Result<SchemaReport> {
    let employee_columns = sqlx::query("PRAGMA table_info(employees)")
        .fetch_all(pool)
        .await
        .context("failed to read employees table info")?
        .iter()
        .map(|row| row.try_get::<String, _>("name"))
        .collect::<Result<Vec<_>, _>>()
        .context("unexpected table_info layout")?;

    let employee_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool)
        .await
        .context("failed to count employees")?;

    Ok(SchemaReport {
        employee_columns,
        employee_count,
    })
}
