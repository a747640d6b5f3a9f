//! Configuration types for pay tiers.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML tier table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayCategory;
use crate::error::{EngineError, EngineResult};
use crate::models::TimeOfDay;

/// Number of tiers in each day category's table.
pub const TIER_COUNT: usize = 3;

/// A single pay tier: a span of the day and the hourly rate paid within it.
///
/// Only the hour of `start` and `end` takes part in boundary checks; the
/// minutes are kept because split shifts restart at the next tier's `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTier {
    /// First time of day covered by the tier (e.g. 09:01).
    #[serde(deserialize_with = "TimeOfDay::deserialize_strict")]
    pub start: TimeOfDay,
    /// Last time of day covered by the tier (e.g. 18:00, or 00:00 for end of day).
    #[serde(deserialize_with = "TimeOfDay::deserialize_strict")]
    pub end: TimeOfDay,
    /// Hourly rate in currency units.
    pub rate: Decimal,
}

impl PayTier {
    /// Creates a pay tier.
    pub const fn new(start: TimeOfDay, end: TimeOfDay, rate: Decimal) -> Self {
        Self { start, end, rate }
    }
}

/// The ordered tiers covering one day category, earliest first.
pub type TierTable = [PayTier; TIER_COUNT];

/// Tier configuration file structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PayrollConfigFile {
    /// Day codes priced with the weekday table. Any other code is a weekend day.
    pub weekday_codes: Vec<String>,
    /// Tiers for weekday codes.
    pub weekday: TierTable,
    /// Tiers for every other code.
    pub weekend: TierTable,
}

/// The validated, immutable tier configuration.
///
/// Built once at startup and passed by reference into the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    weekday_codes: Vec<String>,
    weekday: TierTable,
    weekend: TierTable,
}

impl PayrollConfig {
    /// Creates a configuration, checking the table invariants.
    ///
    /// Returns `InvalidConfig` if a boundary is not a valid time of day, a
    /// rate is negative, a weekday code is empty or not alphabetic, or the
    /// tiers of a table overlap or are out of order.
    ///
    /// Tiers must run earliest first: each tier starts no later than it ends
    /// and ends before the next tier starts. The last tier's end is exempt
    /// since `00:00` there means end of day.
    pub fn new(
        weekday_codes: Vec<String>,
        weekday: TierTable,
        weekend: TierTable,
    ) -> EngineResult<Self> {
        for code in &weekday_codes {
            if code.is_empty() || !code.chars().all(char::is_alphabetic) {
                return Err(EngineError::InvalidConfig {
                    message: format!("weekday code '{}' must be alphabetic", code),
                });
            }
        }

        for (label, table) in [("weekday", &weekday), ("weekend", &weekend)] {
            for (index, tier) in table.iter().enumerate() {
                if !tier.start.is_valid() || !tier.end.is_valid() {
                    return Err(EngineError::InvalidConfig {
                        message: format!(
                            "{} tier {} has an out-of-range boundary {}-{}",
                            label, index, tier.start, tier.end
                        ),
                    });
                }
                if tier.rate.is_sign_negative() {
                    return Err(EngineError::InvalidConfig {
                        message: format!("{} tier {} has negative rate {}", label, index, tier.rate),
                    });
                }
            }

            for (index, pair) in table.windows(2).enumerate() {
                let (current, next) = (&pair[0], &pair[1]);
                if current.start > current.end || current.end >= next.start {
                    return Err(EngineError::InvalidConfig {
                        message: format!(
                            "{} tiers {} and {} overlap or are out of order: {}-{} then {}-{}",
                            label,
                            index,
                            index + 1,
                            current.start,
                            current.end,
                            next.start,
                            next.end
                        ),
                    });
                }
            }
        }

        Ok(Self {
            weekday_codes,
            weekday,
            weekend,
        })
    }

    /// The standard tier table.
    ///
    /// | Tier        | Weekday | Weekend |
    /// |-------------|---------|---------|
    /// | 00:01-09:00 | 25      | 30      |
    /// | 09:01-18:00 | 15      | 20      |
    /// | 18:01-00:00 | 20      | 25      |
    ///
    /// Monday to Friday (`MO TU WE TH FR`) are weekdays.
    pub fn standard() -> Self {
        let table = |early: i64, day: i64, evening: i64| -> TierTable {
            [
                PayTier::new(
                    TimeOfDay::new(0, 1),
                    TimeOfDay::new(9, 0),
                    Decimal::new(early, 0),
                ),
                PayTier::new(
                    TimeOfDay::new(9, 1),
                    TimeOfDay::new(18, 0),
                    Decimal::new(day, 0),
                ),
                PayTier::new(
                    TimeOfDay::new(18, 1),
                    TimeOfDay::MIDNIGHT,
                    Decimal::new(evening, 0),
                ),
            ]
        };

        Self {
            weekday_codes: ["MO", "TU", "WE", "TH", "FR"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            weekday: table(25, 15, 20),
            weekend: table(30, 20, 25),
        }
    }

    /// Returns the day codes priced with the weekday table.
    pub fn weekday_codes(&self) -> &[String] {
        &self.weekday_codes
    }

    /// Returns true if `day_code` is exactly one of the weekday codes.
    pub fn is_weekday_code(&self, day_code: &str) -> bool {
        self.weekday_codes.iter().any(|code| code == day_code)
    }

    /// Returns the tier table for a day category.
    pub fn tiers(&self, category: DayCategory) -> &TierTable {
        match category {
            DayCategory::Weekday => &self.weekday,
            DayCategory::Weekend => &self.weekend,
        }
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<PayrollConfigFile> for PayrollConfig {
    type Error = EngineError;

    fn try_from(file: PayrollConfigFile) -> EngineResult<Self> {
        Self::new(file.weekday_codes, file.weekday, file.weekend)
    }
}
