//! Employee record and work interval types.
//!
//! This module defines the parsed form of one line of the employee log:
//! a name followed by the intervals worked on each logged day.

use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// One worked interval on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkInterval {
    /// The two-letter day code as logged (e.g. "MO", "SU").
    pub day_code: String,
    /// When the interval starts.
    pub start: TimeOfDay,
    /// When the interval ends.
    pub end: TimeOfDay,
}

impl WorkInterval {
    /// Creates a work interval.
    pub fn new(day_code: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            day_code: day_code.into(),
            start,
            end,
        }
    }
}

/// Represents one employee's logged work, in log order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's name as it appears at the start of the line.
    pub name: String,
    /// Intervals worked, in the order they were logged.
    #[serde(default)]
    pub intervals: Vec<WorkInterval>,
}

impl EmployeeRecord {
    /// Creates an employee record.
    pub fn new(name: impl Into<String>, intervals: Vec<WorkInterval>) -> Self {
        Self {
            name: name.into(),
            intervals,
        }
    }
}
