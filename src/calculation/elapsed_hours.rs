//! Elapsed time between two times of day.
//!
//! Hours are rounded to two decimal places here, before any rate is
//! applied, so per-interval amounts are `rounded_hours * rate`.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{MINUTES_PER_HOUR, TimeOfDay};

/// Decimal places kept on elapsed hours and on currency totals.
pub const DECIMAL_PLACES: u32 = 2;

/// Calculates the hours between two times of the same day.
///
/// Returns zero when either time is out of range (hour >= 24 or
/// minute >= 60) or when `end` is before `start`. An interval that crosses
/// midnight is not handled here; the day payment calculator deals with tier
/// splits and passes already-split pieces.
///
/// When the start minute is past the end minute, one hour is borrowed from
/// the end so that 08:45-10:15 is 1.5 hours.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::elapsed_hours;
/// use shift_payroll::models::TimeOfDay;
/// use rust_decimal::Decimal;
///
/// let hours = elapsed_hours(TimeOfDay::new(8, 30), TimeOfDay::new(10, 0));
/// assert_eq!(hours, Decimal::new(150, 2));
///
/// // Out-of-range minute
/// let hours = elapsed_hours(TimeOfDay::new(8, 30), TimeOfDay::new(10, 60));
/// assert_eq!(hours, Decimal::ZERO);
/// ```
pub fn elapsed_hours(start: TimeOfDay, end: TimeOfDay) -> Decimal {
    if !TimeOfDay::is_valid_span(start, end) {
        return Decimal::ZERO;
    }

    let mut end_hour = i64::from(end.hour);
    let mut end_minute = i64::from(end.minute);
    let start_hour = i64::from(start.hour);
    let start_minute = i64::from(start.minute);
    let minutes_per_hour = i64::from(MINUTES_PER_HOUR);

    if start_minute > end_minute {
        end_hour -= 1;
        end_minute += minutes_per_hour;
    }

    let hours = Decimal::from(end_hour - start_hour)
        + Decimal::from(end_minute - start_minute) / Decimal::from(minutes_per_hour);

    round_to_cents(hours)
}

/// Rounds to two decimal places, halves away from zero.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
