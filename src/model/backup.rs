use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct BackupHistory {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "2024-03-31T22:00:00Z")]
    pub date: String,
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "12 employees exported", nullable = true)]
    pub details: Option<String>,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct RecordBackup {
    #[schema(example = "2024-03-31T22:00:00Z")]
    pub date: Option<String>,
    #[schema(example = "success")]
    pub status: Option<String>,
    #[schema(example = "12 employees exported")]
    pub details: Option<String>,
}
