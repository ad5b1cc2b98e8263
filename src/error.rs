//! Crate-level error type
//!
//! Aggregates the component error types so callers using both the
//! calculator and the JSON document APIs can propagate a single error.

use thiserror::Error;

use crate::calculator::CalculatorError;
use crate::json::JsonError;

/// Result type using the crate-level error
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error types
#[derive(Error, Debug)]
pub enum Error {
    /// Arithmetic operation failed
    #[error("Calculator error: {0}")]
    Calculator(#[from] CalculatorError),

    /// JSON document operation failed
    #[error("JSON error: {0}")]
    Json(#[from] JsonError),
}
