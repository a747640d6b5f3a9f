//! Time-of-day model.
//!
//! A [`TimeOfDay`] is an hour/minute pair as it appears in an employee log
//! or a tier boundary. It is allowed to hold out-of-range values (e.g.
//! `21:60`) so that a bad field in a log line can be carried through to the
//! calculator and priced at zero instead of rejected.
//!
//! Serde reads any `H:M` pair of unsigned numbers so reports that carry
//! such values read back unchanged. Tier boundaries go through
//! [`TimeOfDay::deserialize_strict`] instead, which only accepts real times.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Number of hours in a day; valid hours are strictly below this.
pub const HOURS_PER_DAY: u32 = 24;

/// Number of minutes in an hour; valid minutes are strictly below this.
pub const MINUTES_PER_HOUR: u32 = 60;

/// An hour and minute within a single day.
///
/// Ordering compares the hour first and then the minute.
///
/// # Example
///
/// ```
/// use shift_payroll::models::TimeOfDay;
///
/// let start = TimeOfDay::new(9, 1);
/// let end: TimeOfDay = "18:00".parse().unwrap();
/// assert!(start < end);
/// assert_eq!(end.to_string(), "18:00");
/// assert!(!TimeOfDay::new(21, 60).is_valid());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    /// Hour of the day, 0-23 when valid.
    pub hour: u32,
    /// Minute of the hour, 0-59 when valid.
    pub minute: u32,
}

impl TimeOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Creates a time of day without range checks.
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Returns true when `hour < 24` and `minute < 60`.
    pub fn is_valid(&self) -> bool {
        self.hour < HOURS_PER_DAY && self.minute < MINUTES_PER_HOUR
    }

    /// Returns true when both ends are valid and `end` is not before `start`.
    ///
    /// ```
    /// use shift_payroll::models::TimeOfDay;
    ///
    /// assert!(TimeOfDay::is_valid_span(TimeOfDay::new(9, 0), TimeOfDay::new(9, 0)));
    /// assert!(!TimeOfDay::is_valid_span(TimeOfDay::new(20, 0), TimeOfDay::new(21, 60)));
    /// assert!(!TimeOfDay::is_valid_span(TimeOfDay::new(10, 30), TimeOfDay::new(10, 15)));
    /// ```
    pub fn is_valid_span(start: TimeOfDay, end: TimeOfDay) -> bool {
        start.is_valid() && end.is_valid() && start <= end
    }

    /// Deserializes a strict `HH:MM` time, rejecting out-of-range values.
    ///
    /// For use with `#[serde(deserialize_with = "...")]` on fields that must
    /// hold a real time of day.
    pub fn deserialize_strict<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// A string that is not an `H:M` pair of unsigned numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected HH:MM, found '{0}'")]
pub struct TimeOfDayFormatError(String);

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::new(time.hour(), time.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = chrono::ParseError;

    /// Parses a strict `HH:MM` time, so the result is always valid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M").map(Self::from)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeOfDayFormatError;

    /// Splits on `:` without range checks, so `21:60` round-trips.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let fields = value
            .split_once(':')
            .map(|(hour, minute)| (hour.trim().parse::<u32>(), minute.trim().parse::<u32>()));

        match fields {
            Some((Ok(hour), Ok(minute))) => Ok(Self::new(hour, minute)),
            _ => Err(TimeOfDayFormatError(value)),
        }
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}
