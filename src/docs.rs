use crate::model::advance::{Advance, CreateAdvance};
use crate::model::backup::{BackupHistory, RecordBackup};
use crate::model::employee::{CreateEmployee, Employee};
use crate::model::salary_report::{CreateSalaryReport, SalaryReport};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll Records API",
        version = "0.1.0",
        description = r#"
## Payroll Records Backend

Record keeping for a small payroll: employees, salary advances, monthly
salary reports and backup history.

- Rows are insert-only; there are no update or delete endpoints.
- Salary figures are computed by the client and stored as submitted.
- Errors are returned as `{"error": "<message>"}`.
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,

        crate::api::advance::list_advances,
        crate::api::advance::create_advance,

        crate::api::salary_report::list_salary_reports,
        crate::api::salary_report::create_salary_report,

        crate::api::backup::record_backup
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            Advance,
            CreateAdvance,
            SalaryReport,
            CreateSalaryReport,
            BackupHistory,
            RecordBackup
        )
    ),
    tags(
        (name = "Employee", description = "Employee records"),
        (name = "Advance", description = "Salary advances"),
        (name = "Salary Report", description = "Monthly salary reports"),
        (name = "Backup", description = "Backup audit log"),
    )
)]
pub struct ApiDoc;
