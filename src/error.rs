//! Custom error types for Fincast
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! The balance engine itself is infallible: it performs no I/O and raises no
//! recoverable failures. Errors here come from the surfaces around it
//! (configuration, ledger snapshot loading, exports, record validation).

use thiserror::Error;

/// The main error type for Fincast operations
#[derive(Error, Debug)]
pub enum FincastError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Argument parsing errors (dates, months, amounts)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FincastError {
    /// Wrap a model validation error
    pub fn validation(err: impl std::fmt::Display) -> Self {
        Self::Validation(err.to_string())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FincastError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FincastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Fincast operations
pub type FincastResult<T> = Result<T, FincastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FincastError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_helper() {
        let err = FincastError::validation("amount cannot be negative");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: amount cannot be negative"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let fincast_err: FincastError = io_err.into();
        assert!(matches!(fincast_err, FincastError::Io(_)));
    }
}
