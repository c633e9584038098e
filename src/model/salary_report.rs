use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAYMENT_STATUS: &str = "pending";

/// A monthly payroll record. Amounts are computed by the caller; this
/// service only stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct SalaryReport {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "EMP-001")]
    pub employee_code: String,
    #[schema(example = "2024-03")]
    pub month: String,
    pub basic_salary: f64,
    pub monthly_incentives: f64,
    pub bonus: f64,
    pub overtime_hours: f64,
    pub overtime_amount: f64,
    pub work_days: i64,
    pub absence_days: i64,
    pub penalty_days: i64,
    pub allowances: f64,
    pub deductions_purchases: f64,
    pub deductions_advances: f64,
    pub deductions_absence: f64,
    pub deductions_hourly: f64,
    pub deductions_penalties: f64,
    pub total_deductions: f64,
    #[schema(example = 5400.0)]
    pub gross_salary: f64,
    #[schema(example = 5100.0)]
    pub net_salary: f64,
    #[schema(example = "pending")]
    pub payment_status: String,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateSalaryReport {
    #[schema(example = "EMP-001")]
    pub employee_code: Option<String>,
    #[schema(example = "2024-03")]
    pub month: Option<String>,
    pub basic_salary: Option<f64>,
    pub monthly_incentives: Option<f64>,
    pub bonus: Option<f64>,
    pub overtime_hours: Option<f64>,
    pub overtime_amount: Option<f64>,
    pub work_days: Option<i64>,
    pub absence_days: Option<i64>,
    pub penalty_days: Option<i64>,
    pub allowances: Option<f64>,
    pub deductions_purchases: Option<f64>,
    pub deductions_advances: Option<f64>,
    pub deductions_absence: Option<f64>,
    pub deductions_hourly: Option<f64>,
    pub deductions_penalties: Option<f64>,
    pub total_deductions: Option<f64>,
    /// Required; never defaulted
    #[schema(example = 5400.0)]
    pub gross_salary: Option<f64>,
    /// Required; never defaulted
    #[schema(example = 5100.0)]
    pub net_salary: Option<f64>,
    #[schema(example = "pending")]
    pub payment_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSalaryReport {
    pub employee_code: Option<String>,
    pub month: Option<String>,
    pub basic_salary: f64,
    pub monthly_incentives: f64,
    pub bonus: f64,
    pub overtime_hours: f64,
    pub overtime_amount: f64,
    pub work_days: i64,
    pub absence_days: i64,
    pub penalty_days: i64,
    pub allowances: f64,
    pub deductions_purchases: f64,
    pub deductions_advances: f64,
    pub deductions_absence: f64,
    pub deductions_hourly: f64,
    pub deductions_penalties: f64,
    pub total_deductions: f64,
    pub gross_salary: Option<f64>,
    pub net_salary: Option<f64>,
    pub payment_status: String,
}

impl CreateSalaryReport {
    pub fn with_defaults(self) -> NewSalaryReport {
        NewSalaryReport {
            employee_code: self.employee_code,
            month: self.month,
            basic_salary: self.basic_salary.unwrap_or_default(),
            monthly_incentives: self.monthly_incentives.unwrap_or_default(),
            bonus: self.bonus.unwrap_or_default(),
            overtime_hours: self.overtime_hours.unwrap_or_default(),
            overtime_amount: self.overtime_amount.unwrap_or_default(),
            work_days: self.work_days.unwrap_or_default(),
            absence_days: self.absence_days.unwrap_or_default(),
            penalty_days: self.penalty_days.unwrap_or_default(),
            allowances: self.allowances.unwrap_or_default(),
            deductions_purchases: self.deductions_purchases.unwrap_or_default(),
            deductions_advances: self.deductions_advances.unwrap_or_default(),
            deductions_absence: self.deductions_absence.unwrap_or_default(),
            deductions_hourly: self.deductions_hourly.unwrap_or_default(),
            deductions_penalties: self.deductions_penalties.unwrap_or_default(),
            total_deductions: self.total_deductions.unwrap_or_default(),
            gross_salary: self.gross_salary,
            net_salary: self.net_salary,
            payment_status: self
                .payment_status
                .unwrap_or_else(|| DEFAULT_PAYMENT_STATUS.to_string()),
        }
    }
}
