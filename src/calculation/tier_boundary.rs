//! Tier boundary checks.
//!
//! Only the hour of a tier boundary is used as the threshold. The minute of
//! the time being checked decides the on-the-hour case:
//!
//! - a start exactly on a tier's start hour (`hh:00`) is *outside* the tier,
//!   so it belongs to the previous one;
//! - an end exactly on a tier's end hour (`hh:00`) is *inside* the tier.
//!
//! A tier whose end hour is 0 is the end-of-day tier and accepts every valid
//! end hour.

use serde::{Deserialize, Serialize};

use crate::models::{HOURS_PER_DAY, TimeOfDay};

/// Which side of a tier a time is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// An interval start checked against a tier's start.
    Lower,
    /// An interval end checked against a tier's end.
    Upper,
}

/// Checks whether `time` satisfies a tier boundary.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::{satisfies_boundary, Bound};
/// use shift_payroll::models::TimeOfDay;
///
/// let tier_start = TimeOfDay::new(9, 1);
/// assert!(satisfies_boundary(TimeOfDay::new(9, 30), tier_start, Bound::Lower));
/// assert!(!satisfies_boundary(TimeOfDay::new(9, 0), tier_start, Bound::Lower));
///
/// let tier_end = TimeOfDay::new(9, 0);
/// assert!(satisfies_boundary(TimeOfDay::new(9, 0), tier_end, Bound::Upper));
/// assert!(!satisfies_boundary(TimeOfDay::new(9, 30), tier_end, Bound::Upper));
/// ```
pub fn satisfies_boundary(time: TimeOfDay, boundary: TimeOfDay, bound: Bound) -> bool {
    let tier_hour = boundary.hour;

    match bound {
        Bound::Lower => {
            if time.hour == tier_hour {
                time.minute != 0
            } else {
                time.hour > tier_hour
            }
        }
        Bound::Upper => {
            if time.hour == tier_hour {
                time.minute == 0
            } else if tier_hour == 0 {
                time.hour < HOURS_PER_DAY
            } else {
                time.hour < tier_hour
            }
        }
    }
}
