//! Error types for People Finder.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur during search operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The strategy selector is not one of `ALL`, `ANY` or `NONE`
    #[error("Invalid strategy: {0:?} (expected one of ALL, ANY, NONE)")]
    InvalidStrategy(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while loading records or running the interactive session.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the data file or the terminal, or writing output, failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to render results as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The number of people could not be parsed
    #[error("Invalid number of people: {0:?}")]
    InvalidCount(String),

    /// Input ended before all announced records were read
    #[error("Unexpected end of input: expected {expected} records, read {read}")]
    UnexpectedEof { expected: usize, read: usize },
}

/// Convenience type alias for Results with SearchError
pub type SearchResult<T> = Result<T, SearchError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CliError
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::InvalidStrategy("SOME".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid strategy: \"SOME\" (expected one of ALL, ANY, NONE)"
        );

        let err = ConfigError::InvalidValue {
            var: "PEOPLE_OUTPUT_FORMAT".to_string(),
            reason: "Must be text or json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for PEOPLE_OUTPUT_FORMAT: Must be text or json"
        );

        let err = CliError::InvalidCount("three".to_string());
        assert_eq!(err.to_string(), "Invalid number of people: \"three\"");
    }

    #[test]
    fn test_unexpected_eof_variant() {
        let err = CliError::UnexpectedEof {
            expected: 3,
            read: 1,
        };
        assert!(err.to_string().contains("expected 3"));
        assert!(err.to_string().contains("read 1"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: CliError = io.into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("missing.txt"));
    }
}
