//! Day category detection.
//!
//! Maps a logged day code to the tier table it is priced against.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PayrollConfig;

/// The tier table a day is priced against.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::DayCategory;
///
/// assert_eq!(DayCategory::Weekend.to_string(), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// A day code listed in the configured weekday codes.
    Weekday,
    /// Any other day code.
    Weekend,
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCategory::Weekday => write!(f, "Weekday"),
            DayCategory::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Determines the day category for a logged day code.
///
/// Codes found verbatim in the configured weekday set are
/// [`DayCategory::Weekday`]; everything else, including lowercase spellings
/// and codes that are not real days, is [`DayCategory::Weekend`].
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::{get_day_category, DayCategory};
/// use shift_payroll::config::PayrollConfig;
///
/// let config = PayrollConfig::standard();
/// assert_eq!(get_day_category("MO", &config), DayCategory::Weekday);
/// assert_eq!(get_day_category("SU", &config), DayCategory::Weekend);
/// ```
pub fn get_day_category(day_code: &str, config: &PayrollConfig) -> DayCategory {
    if config.is_weekday_code(day_code) {
        DayCategory::Weekday
    } else {
        debug!(day_code, "Day code not in weekday codes, priced as weekend");
        DayCategory::Weekend
    }
}
