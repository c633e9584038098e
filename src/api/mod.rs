pub mod advance;
pub mod backup;
pub mod employee;
pub mod salary_report;
