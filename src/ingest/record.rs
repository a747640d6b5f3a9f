//! Employee record parsing.
//!
//! A record line is a name followed by groups of five fields:
//! `day code, start hour, start minute, end hour, end minute`.
//!
//! Fields are separated by `=`, `,`, `:`, `-` or whitespace, and a field
//! also ends wherever letters meet digits. That makes both of these
//! equivalent:
//!
//! ```text
//! RENE=MO10:00-12:00,SU20:00-21:00
//! RENE,MO=10:00-12:00,SU=20:00-21:00
//! ```
//!
//! Numeric fields are not range-checked here; `21:60` parses and is priced
//! at zero later.

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, TimeOfDay, WorkInterval};

/// Characters that separate fields in a record line.
pub const FIELD_DELIMITERS: [char; 4] = ['=', ',', ':', '-'];

/// Number of fields describing one work interval.
pub const FIELDS_PER_INTERVAL: usize = 5;

/// Splits a record line into fields.
///
/// # Example
///
/// ```
/// use shift_payroll::ingest::tokenize;
///
/// let tokens = tokenize("ASTRID=MO10:00-12:00");
/// assert_eq!(tokens, vec!["ASTRID", "MO", "10", "00", "12", "00"]);
/// ```
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    // Byte offset where the current token began, and whether it is alphabetic.
    let mut current: Option<(usize, bool)> = None;

    for (offset, c) in line.char_indices() {
        if FIELD_DELIMITERS.contains(&c) || c.is_whitespace() {
            if let Some((begin, _)) = current.take() {
                tokens.push(&line[begin..offset]);
            }
            continue;
        }

        let alphabetic = c.is_alphabetic();
        match current {
            Some((begin, kind)) if kind != alphabetic => {
                tokens.push(&line[begin..offset]);
                current = Some((offset, alphabetic));
            }
            Some(_) => {}
            None => current = Some((offset, alphabetic)),
        }
    }

    if let Some((begin, _)) = current {
        tokens.push(&line[begin..]);
    }

    tokens
}

/// Parses one line of the employee log.
///
/// Returns `MalformedRecord` if the line is empty, the name is not
/// alphabetic, the fields after the name are not a multiple of five, a day
/// code is not alphabetic, or a time field is not an unsigned number.
///
/// # Example
///
/// ```
/// use shift_payroll::ingest::parse_record;
/// use shift_payroll::models::TimeOfDay;
///
/// let record = parse_record("ASTRID=MO10:00-12:00,SU20:00-21:00").unwrap();
/// assert_eq!(record.name, "ASTRID");
/// assert_eq!(record.intervals.len(), 2);
/// assert_eq!(record.intervals[1].day_code, "SU");
/// assert_eq!(record.intervals[1].end, TimeOfDay::new(21, 0));
/// ```
pub fn parse_record(line: &str) -> EngineResult<EmployeeRecord> {
    let malformed = |message: String| EngineError::MalformedRecord {
        record: line.trim().to_string(),
        message,
    };

    let tokens = tokenize(line);
    let (name, fields) = tokens
        .split_first()
        .ok_or_else(|| malformed("record is empty".to_string()))?;

    if !is_alphabetic(name) {
        return Err(malformed(format!(
            "employee name must be alphabetic, found '{}'",
            name
        )));
    }

    if fields.len() % FIELDS_PER_INTERVAL != 0 {
        return Err(malformed(format!(
            "expected groups of {} fields after the name, found {} fields",
            FIELDS_PER_INTERVAL,
            fields.len()
        )));
    }

    let intervals = fields
        .chunks_exact(FIELDS_PER_INTERVAL)
        .enumerate()
        .map(|(index, group)| {
            parse_interval(group).map_err(|message| {
                malformed(format!("interval {}: {}", index + 1, message))
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(EmployeeRecord::new(*name, intervals))
}

fn parse_interval(group: &[&str]) -> Result<WorkInterval, String> {
    let day_code = group[0];
    if !is_alphabetic(day_code) {
        return Err(format!("day code must be alphabetic, found '{}'", day_code));
    }

    let start = TimeOfDay::new(parse_number(group[1])?, parse_number(group[2])?);
    let end = TimeOfDay::new(parse_number(group[3])?, parse_number(group[4])?);

    Ok(WorkInterval::new(day_code, start, end))
}

fn parse_number(field: &str) -> Result<u32, String> {
    if !field.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("expected a number, found '{}'", field));
    }
    field
        .parse()
        .map_err(|_| format!("number '{}' is too large", field))
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::new(hour, minute)
    }

    #[test]
    fn test_tokenize_compact_format() {
        let tokens = tokenize("RENE=MO10:00-12:00,TU10:00-12:00");
        assert_eq!(
            tokens,
            vec!["RENE", "MO", "10", "00", "12", "00", "TU", "10", "00", "12", "00"]
        );
    }

    #[test]
    fn test_tokenize_comma_format() {
        let tokens = tokenize("RENE,MO=10:00-12:00");
        assert_eq!(tokens, vec!["RENE", "MO", "10", "00", "12", "00"]);
    }

    #[test]
    fn test_tokenize_ignores_whitespace_and_carriage_return() {
        let tokens = tokenize("  RENE = MO10:00-12:00\r");
        assert_eq!(tokens, vec!["RENE", "MO", "10", "00", "12", "00"]);
    }

    #[test]
    fn test_tokenize_mixed_case_name_is_one_token() {
        let tokens = tokenize("ASTRIDgdg=SU20:00-21:00");
        assert_eq!(tokens[0], "ASTRIDgdg");
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,=").is_empty());
    }

    #[test]
    fn test_parse_record_intervals() {
        let record = parse_record("ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00").unwrap();

        assert_eq!(record.name, "ASTRID");
        assert_eq!(
            record.intervals,
            vec![
                WorkInterval::new("MO", t(10, 0), t(12, 0)),
                WorkInterval::new("TH", t(12, 0), t(14, 0)),
                WorkInterval::new("SU", t(20, 0), t(21, 0)),
            ]
        );
    }

    #[test]
    fn test_parse_record_keeps_out_of_range_values() {
        let record = parse_record("ASTRID=SU20:00-21:60").unwrap();
        assert_eq!(record.intervals[0].end, t(21, 60));
        assert!(!record.intervals[0].end.is_valid());
    }

    #[test]
    fn test_parse_record_name_only() {
        let record = parse_record("IDLE").unwrap();
        assert!(record.intervals.is_empty());
    }

    #[test]
    fn test_parse_record_rejects_empty_line() {
        assert!(matches!(
            parse_record("   "),
            Err(EngineError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_parse_record_rejects_numeric_name() {
        match parse_record("42=MO10:00-12:00") {
            Err(EngineError::MalformedRecord { message, .. }) => {
                assert!(message.contains("name"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_record_rejects_incomplete_group() {
        match parse_record("RENE=MO10:00-12") {
            Err(EngineError::MalformedRecord { record, message }) => {
                assert_eq!(record, "RENE=MO10:00-12");
                assert!(message.contains("groups of 5"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_record_rejects_misplaced_day_code() {
        // Five fields, but the day code is in the wrong slot.
        match parse_record("RENE=10MO:00-12:00") {
            Err(EngineError::MalformedRecord { message, .. }) => {
                assert!(message.contains("interval 1"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_record_rejects_huge_number() {
        assert!(matches!(
            parse_record("RENE=MO99999999999:00-12:00"),
            Err(EngineError::MalformedRecord { .. })
        ));
    }
}
