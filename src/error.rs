//! Error types for the shift payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failures that reach the caller: file ingestion, configuration
//! loading and record parsing. Calculation problems (out-of-range times,
//! intervals that match no tier) never surface here; they degrade to a
//! zero amount and a [`PayWarning`](crate::models::PayWarning).

use thiserror::Error;

/// The main error type for the shift payroll engine.
///
/// # Example
///
/// ```
/// use shift_payroll::error::EngineError;
///
/// let error = EngineError::FileNotFound {
///     path: "employees_data1.txt".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: employees_data1.txt");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The employee log file was not found at the specified path.
    #[error("Input file not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: String,
    },

    /// The employee log file exists but could not be read.
    #[error("Failed to read input file '{path}': {message}")]
    FileReadError {
        /// The path that was attempted.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates a table invariant.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the violated invariant.
        message: String,
    },

    /// An employee record line does not follow the record grammar.
    #[error("Malformed record '{record}': {message}")]
    MalformedRecord {
        /// The offending line.
        record: String,
        /// A description of what made the record malformed.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Maps an I/O error on `path` to `FileNotFound` or `FileReadError`.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => EngineError::FileNotFound { path },
            _ => EngineError::FileReadError {
                path,
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_file_not_found_displays_path() {
        let error = EngineError::FileNotFound {
            path: "/data/employees_data1.txt".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Input file not found: /data/employees_data1.txt"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_malformed_record_displays_record_and_message() {
        let error = EngineError::MalformedRecord {
            record: "RENE=MO10:00".to_string(),
            message: "expected groups of 5 fields".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed record 'RENE=MO10:00': expected groups of 5 fields"
        );
    }

    #[test]
    fn test_invalid_config_displays_message() {
        let error = EngineError::InvalidConfig {
            message: "negative rate".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid configuration: negative rate");
    }

    #[test]
    fn test_not_found_io_error_maps_to_file_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        match EngineError::from_io(Path::new("missing.txt"), err) {
            EngineError::FileNotFound { path } => assert_eq!(path, "missing.txt"),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_other_io_error_maps_to_read_error() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        match EngineError::from_io(Path::new("locked.txt"), err) {
            EngineError::FileReadError { path, message } => {
                assert_eq!(path, "locked.txt");
                assert!(message.contains("denied"));
            }
            other => panic!("Expected FileReadError, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_file_not_found() -> EngineResult<()> {
            Err(EngineError::FileNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_file_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
