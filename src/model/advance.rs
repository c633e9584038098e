use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Advance {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "EMP-001")]
    pub employee_code: String,
    #[schema(example = 300.0)]
    pub amount: f64,
    #[schema(example = "2024-03-15", value_type = String, format = "date")]
    pub request_date: NaiveDate,
    /// Stored as INTEGER 0/1
    #[schema(example = false)]
    pub is_paid: bool,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateAdvance {
    #[schema(example = "EMP-001")]
    pub employee_code: Option<String>,
    #[schema(example = 300.0)]
    pub amount: Option<f64>,
    #[schema(example = "2024-03-15", format = "date", value_type = Option<String>)]
    pub request_date: Option<NaiveDate>,
    #[schema(example = false)]
    pub is_paid: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAdvance {
    pub employee_code: Option<String>,
    pub amount: Option<f64>,
    pub request_date: Option<NaiveDate>,
    pub is_paid: bool,
}

impl CreateAdvance {
    pub fn with_defaults(self) -> NewAdvance {
        NewAdvance {
            employee_code: self.employee_code,
            amount: self.amount,
            request_date: self.request_date,
            is_paid: self.is_paid.unwrap_or(false),
        }
    }
}
