use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};
use crate::model::backup::{BackupHistory, RecordBackup};

/// Appends an audit entry. Backup history is never read back through the API.
pub async fn record(pool: &SqlitePool, backup: RecordBackup) -> StoreResult<BackupHistory> {
    sqlx::query_as::<_, BackupHistory>(
        "INSERT INTO backup_history (date, status, details) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(backup.date)
    .bind(backup.status)
    .bind(backup.details)
    .fetch_one(pool)
    .await
    .map_err(StoreError::storage("record backup"))
}
