//! Core data models for the shift payroll engine.
//!
//! This module contains the domain models used throughout the engine.

mod employee;
mod payment_result;
mod time_of_day;

pub use employee::{EmployeeRecord, WorkInterval};
pub use payment_result::{CURRENCY, IntervalPayment, PayWarning, PaymentResult, WarningKind};
pub use time_of_day::{HOURS_PER_DAY, MINUTES_PER_HOUR, TimeOfDay, TimeOfDayFormatError};
