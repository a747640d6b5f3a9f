//! Payment result models for the shift payroll engine.
//!
//! This module contains the [`PaymentResult`] type and its associated structures
//! that capture the outcome of pricing one employee's log: the total owed, a
//! per-interval breakdown, and the warnings raised for intervals that were
//! priced at zero.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeOfDay;
use crate::calculation::{DayCategory, TierResolution};

/// Currency label used in payment summaries.
pub const CURRENCY: &str = "USD";

/// The kind of problem found while pricing an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A time field was out of range, or the interval ended before it started.
    InvalidTimeValue,
    /// The interval matched no tier and no adjacent-tier split.
    NoMatchingTier,
    /// More than one tier matched the whole interval; the last one was used.
    AmbiguousTier,
    /// Split-shift recursion went deeper than the tier table allows.
    SplitDepthExceeded,
}

/// A warning generated while pricing an employee's intervals.
///
/// Warnings never abort a calculation; the affected interval contributes
/// whatever amount the calculator produced (zero for everything except
/// [`WarningKind::AmbiguousTier`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayWarning {
    /// Position of the interval within the employee's record.
    pub interval_index: usize,
    /// What went wrong.
    pub kind: WarningKind,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The priced form of a single work interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalPayment {
    /// The day code as logged.
    pub day_code: String,
    /// The tier table the interval was priced against.
    pub category: DayCategory,
    /// Start of the interval.
    pub start: TimeOfDay,
    /// End of the interval.
    pub end: TimeOfDay,
    /// Amount owed for this interval.
    pub amount: Decimal,
    /// How the interval was matched to the tier table.
    pub resolution: TierResolution,
}

/// The complete result of pricing one employee record.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PaymentResult;
/// use rust_decimal::Decimal;
///
/// let result = PaymentResult {
///     employee_name: "ASTRID".to_string(),
///     total_amount: Decimal::new(8500, 2),
///     intervals: vec![],
///     warnings: vec![],
/// };
/// assert_eq!(result.to_string(), "The amount to pay ASTRID is: 85.00 USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    /// The employee's name.
    pub employee_name: String,
    /// Total owed, rounded to cents.
    pub total_amount: Decimal,
    /// Per-interval breakdown in log order.
    pub intervals: Vec<IntervalPayment>,
    /// Warnings for intervals that were degraded.
    #[serde(default)]
    pub warnings: Vec<PayWarning>,
}

impl PaymentResult {
    /// Returns the total formatted with exactly two decimal places.
    pub fn formatted_amount(&self) -> String {
        format!("{:.2}", self.total_amount)
    }

    /// Returns true if any interval raised a warning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl fmt::Display for PaymentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The amount to pay {} is: {} {}",
            self.employee_name,
            self.formatted_amount(),
            CURRENCY
        )
    }
}
