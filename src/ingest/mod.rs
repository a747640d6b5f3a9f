//! Input side of the payroll engine.
//!
//! File ingestion supplies the raw lines of the employee log, blocking or
//! non-blocking; record parsing turns each line into an
//! [`EmployeeRecord`](crate::models::EmployeeRecord).

mod reader;
mod record;

pub use reader::{ReadMode, load_lines, read_lines, read_lines_async};
pub use record::{FIELD_DELIMITERS, FIELDS_PER_INTERVAL, parse_record, tokenize};
