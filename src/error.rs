//! Custom error types for the expense tracker
//!
//! Validation errors carry the exact message shown to the user before a
//! re-prompt. Parse errors mean the backing store holds data that never went
//! through entry-time validation and are fatal to the operation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Backing store errors (open, create, rename)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Delimited-text encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Entered date does not match the configured date format
    #[error("Invalid date input.")]
    InvalidDate(String),

    /// Entered amount is not a number
    #[error("Invalid input for amount.")]
    InvalidAmount(String),

    /// Entered budget is not a number
    #[error("Invalid input. Please enter a valid number.")]
    InvalidNumber(String),

    /// Entered budget is zero or negative
    #[error("Budget must be a positive number.")]
    NonPositiveBudget(Decimal),

    /// Entered number is real but outside the exact decimal range
    #[error("Number is out of range.")]
    OutOfRange(String),

    /// Budget arithmetic left the exact decimal range
    #[error("Amount overflow while computing the {0}")]
    Overflow(&'static str),

    /// A persisted field could not be parsed when it was needed
    #[error("Malformed {field} in data file: {value:?}")]
    Parse { field: &'static str, value: String },

    /// Standard input was closed while waiting for an answer
    #[error("Input closed before a valid answer was entered")]
    InputClosed,
}

impl TrackerError {
    /// Create a parse error for a persisted field
    pub fn parse(field: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            field,
            value: value.into(),
        }
    }

    /// Check if this error should be answered with a re-prompt
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::InvalidAmount(_)
                | Self::InvalidNumber(_)
                | Self::NonPositiveBudget(_)
                | Self::OutOfRange(_)
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
