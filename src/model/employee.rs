use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_MONTHLY_INCENTIVES: f64 = 0.0;
pub const DEFAULT_WORK_DAYS: i64 = 22;
pub const DEFAULT_DAILY_WORK_HOURS: f64 = 8.0;
pub const DEFAULT_STATUS: &str = "active";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "code": "EMP-001",
        "name": "John Doe",
        "basic_salary": 5000.0,
        "job_title": "Accountant",
        "hire_date": "2024-01-01",
        "monthly_incentives": 0.0,
        "work_days": 22,
        "daily_work_hours": 8.0,
        "status": "active",
        "created_at": "2024-01-01T09:00:00"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP-001")]
    pub code: String,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = 5000.0)]
    pub basic_salary: f64,

    #[schema(example = "Accountant", nullable = true)]
    pub job_title: Option<String>,

    #[schema(
        example = "2024-01-01",
        value_type = Option<String>,
        format = "date"
    )]
    pub hire_date: Option<NaiveDate>,

    #[schema(example = 0.0)]
    pub monthly_incentives: f64,

    #[schema(example = 22)]
    pub work_days: i64,

    #[schema(example = 8.0)]
    pub daily_work_hours: f64,

    #[schema(example = "active")]
    pub status: String,

    #[schema(value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

/// Request body for `POST /employees`. Every field may be omitted; the
/// required ones (`code`, `name`, `basic_salary`) are enforced by the
/// table's NOT NULL constraints.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001")]
    pub code: Option<String>,
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    #[schema(example = 5000.0)]
    pub basic_salary: Option<f64>,
    #[schema(example = "Accountant")]
    pub job_title: Option<String>,
    #[schema(example = "2024-01-01", format = "date", value_type = Option<String>)]
    pub hire_date: Option<NaiveDate>,
    #[schema(example = 250.0)]
    pub monthly_incentives: Option<f64>,
    #[schema(example = 22)]
    pub work_days: Option<i64>,
    #[schema(example = 8.0)]
    pub daily_work_hours: Option<f64>,
    #[schema(example = "active")]
    pub status: Option<String>,
}

/// An employee row ready to insert, with every optional column resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub code: Option<String>,
    pub name: Option<String>,
    pub basic_salary: Option<f64>,
    pub job_title: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub monthly_incentives: f64,
    pub work_days: i64,
    pub daily_work_hours: f64,
    pub status: String,
}

impl CreateEmployee {
    pub fn with_defaults(self) -> NewEmployee {
        NewEmployee {
            code: self.code,
            name: self.name,
            basic_salary: self.basic_salary,
            job_title: self.job_title,
            hire_date: self.hire_date,
            monthly_incentives: self.monthly_incentives.unwrap_or(DEFAULT_MONTHLY_INCENTIVES),
            work_days: self.work_days.unwrap_or(DEFAULT_WORK_DAYS),
            daily_work_hours: self.daily_work_hours.unwrap_or(DEFAULT_DAILY_WORK_HOURS),
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }
}
