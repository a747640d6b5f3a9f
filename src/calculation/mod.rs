//! Calculation logic for the shift payroll engine.
//!
//! This module contains the pay calculation pipeline: day category
//! detection, elapsed time arithmetic, tier boundary checks, per-interval
//! pricing with split shifts, and per-employee aggregation. Everything here
//! is a pure function over already-loaded data.

mod day_category;
mod day_payment;
mod elapsed_hours;
mod employee_payment;
mod tier_boundary;

pub use day_category::{DayCategory, get_day_category};
pub use day_payment::{
    IntervalPay, MAX_SPLIT_DEPTH, TierResolution, pay_for_interval, resolve_interval,
};
pub use elapsed_hours::{DECIMAL_PLACES, elapsed_hours, round_to_cents};
pub use employee_payment::{calculate_employee_payment, total_pay};
pub use tier_boundary::{Bound, satisfies_boundary};
