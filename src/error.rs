//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Reasons raw form input is rejected before an expense is created
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Amount, date, or category was left empty
    #[error("Please enter a valid amount, date, and category.")]
    MissingFields,

    /// Date text did not match dd/MM/yyyy
    #[error("Invalid date format '{0}'. Please use dd/MM/yyyy.")]
    InvalidDate(String),

    /// Amount text is not a finite decimal number
    #[error("Invalid amount entered: '{0}'.")]
    InvalidAmount(String),
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected form input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Delete requested with nothing (or nothing valid) selected
    #[error("No expense selected.")]
    NoSelection,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from reading or writing the expense file.
    ///
    /// When `add` or `delete` return one of these, the in-memory change has
    /// already been applied.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io(_) | Self::Json(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExpenseError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_messages() {
        let err: ExpenseError = ValidationError::MissingFields.into();
        assert_eq!(
            err.to_string(),
            "Please enter a valid amount, date, and category."
        );
        assert!(err.is_validation());
        assert!(!err.is_persistence());

        let err = ValidationError::InvalidDate("2024-12-31".into());
        assert_eq!(
            err.to_string(),
            "Invalid date format '2024-12-31'. Please use dd/MM/yyyy."
        );
    }

    #[test]
    fn test_no_selection() {
        let err = ExpenseError::NoSelection;
        assert_eq!(err.to_string(), "No expense selected.");
        assert!(!err.is_persistence());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExpenseError = io_err.into();
        assert!(matches!(err, ExpenseError::Io(_)));
        assert!(err.is_persistence());
    }
}
