//! Error types for the calculator.

use thiserror::Error;

/// Errors that can occur while driving the calculator.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Cannot divide by zero.")]
    DivideByZero,

    #[error("Unknown key: {0:?}")]
    UnknownKey(char),

    #[error("Invalid keypad layout: {0}")]
    Layout(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;
