use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::error::ApiResult;
use crate::model::backup::{BackupHistory, RecordBackup};

#[utoipa::path(
    post,
    path = "/api/backup-history",
    request_body = RecordBackup,
    responses(
        (status = 201, description = "Backup event recorded", body = BackupHistory),
        (status = 500, description = "Storage failure")
    ),
    tag = "Backup"
)]
pub async fn record_backup(
    pool: web::Data<SqlitePool>,
    payload: web::Json<RecordBackup>,
) -> ApiResult<HttpResponse> {
    let entry = db::backup::record(pool.get_ref(), payload.into_inner()).await?;
    info!(id = entry.id, status = %entry.status, "Backup event recorded");
    Ok(HttpResponse::Created().json(entry))
}
