//! Employee payment aggregation.
//!
//! Prices every interval in an employee record against the tier table for
//! its day code and sums the amounts. Bad intervals never fail the record:
//! they contribute whatever the calculator produced (zero for invalid times)
//! and leave a [`PayWarning`] behind.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::PayrollConfig;
use crate::models::{
    EmployeeRecord, IntervalPayment, PayWarning, PaymentResult, WarningKind, WorkInterval,
};

use super::day_category::get_day_category;
use super::day_payment::resolve_interval;
use super::elapsed_hours::{DECIMAL_PLACES, round_to_cents};

/// Calculates the total owed for a sequence of intervals, rounded to cents.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::total_pay;
/// use shift_payroll::config::PayrollConfig;
/// use shift_payroll::models::{TimeOfDay, WorkInterval};
/// use rust_decimal::Decimal;
///
/// let intervals = vec![
///     WorkInterval::new("MO", TimeOfDay::new(10, 0), TimeOfDay::new(12, 0)),
///     WorkInterval::new("TH", TimeOfDay::new(12, 0), TimeOfDay::new(14, 0)),
///     WorkInterval::new("SU", TimeOfDay::new(20, 0), TimeOfDay::new(21, 0)),
/// ];
///
/// let total = total_pay(&intervals, &PayrollConfig::standard());
/// assert_eq!(total, Decimal::new(8500, 2));
/// ```
pub fn total_pay(intervals: &[WorkInterval], config: &PayrollConfig) -> Decimal {
    let (payments, _) = price_intervals(intervals, config);
    round_total(payments.iter().map(|p| p.amount).sum())
}

/// Calculates the full payment result for one employee record.
///
/// The result carries the rounded total, the per-interval breakdown in log
/// order, and a warning for every interval that was degraded.
pub fn calculate_employee_payment(record: &EmployeeRecord, config: &PayrollConfig) -> PaymentResult {
    let (intervals, warnings) = price_intervals(&record.intervals, config);
    let total_amount = round_total(intervals.iter().map(|p| p.amount).sum());

    if !warnings.is_empty() {
        warn!(
            employee = %record.name,
            warnings = warnings.len(),
            "Some intervals were priced at a degraded amount"
        );
    }

    PaymentResult {
        employee_name: record.name.clone(),
        total_amount,
        intervals,
        warnings,
    }
}

fn price_intervals(
    intervals: &[WorkInterval],
    config: &PayrollConfig,
) -> (Vec<IntervalPayment>, Vec<PayWarning>) {
    let mut payments = Vec::with_capacity(intervals.len());
    let mut warnings = Vec::new();

    for (index, interval) in intervals.iter().enumerate() {
        let category = get_day_category(&interval.day_code, config);
        let pay = resolve_interval(interval.start, interval.end, config.tiers(category));

        for issue in pay.issues {
            warnings.push(warning(index, interval, issue));
        }

        payments.push(IntervalPayment {
            day_code: interval.day_code.clone(),
            category,
            start: interval.start,
            end: interval.end,
            amount: pay.amount,
            resolution: pay.resolution,
        });
    }

    (payments, warnings)
}

fn warning(index: usize, interval: &WorkInterval, kind: WarningKind) -> PayWarning {
    let span = format!("{} {}-{}", interval.day_code, interval.start, interval.end);
    let message = match kind {
        WarningKind::InvalidTimeValue => format!("{} has an out-of-range or reversed time", span),
        WarningKind::NoMatchingTier => format!("{} matches no pay tier", span),
        WarningKind::AmbiguousTier => {
            format!("{} matches several pay tiers, the last one was used", span)
        }
        WarningKind::SplitDepthExceeded => {
            format!("{} split too many times, part of it was priced at zero", span)
        }
    };

    PayWarning {
        interval_index: index,
        kind,
        message,
    }
}

/// Rounds a total to cents and fixes the scale at two places.
fn round_total(sum: Decimal) -> Decimal {
    let mut total = round_to_cents(sum);
    total.rescale(DECIMAL_PLACES);
    total
}
