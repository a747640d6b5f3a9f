//! Batch payroll service and its report.

mod payroll;
mod report;

pub use payroll::PayrollService;
pub use report::{OutputFormat, PayrollReport, RejectedRecord};
