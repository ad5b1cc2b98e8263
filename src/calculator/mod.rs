//! Guarded floating-point arithmetic
//!
//! Pure binary operations over pairs of `f64` values. Division and
//! remainder refuse a zero divisor instead of letting IEEE semantics
//! produce an infinity or NaN; every other operation is total. Nothing
//! here holds state, so the functions are safe to call from any thread.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Result type for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Calculator error types
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    /// Divisor was zero, the quotient is undefined
    #[error("Division by zero is not allowed")]
    DivisionByZero,
}

/// Return the sum of `a` and `b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Return the difference of `a` and `b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Return the product of `a` and `b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Return the quotient of `a` and `b`.
///
/// Fails with [`CalculatorError::DivisionByZero`] when `b` is zero
/// (including `-0.0`); the division itself is never performed for a zero
/// divisor.
pub fn divide(a: f64, b: f64) -> CalculatorResult<f64> {
    if b == 0.0 {
        debug!("Rejecting division of {} by zero", a);
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(a / b)
}

/// Return the remainder of `a` divided by `b`.
///
/// Guarded the same way as [`divide`]: a zero divisor fails instead of
/// yielding NaN. The result keeps the sign of the dividend.
pub fn remainder(a: f64, b: f64) -> CalculatorResult<f64> {
    if b == 0.0 {
        debug!("Rejecting remainder of {} by zero", a);
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(a % b)
}

/// Raise `base` to the power `exp`.
pub fn power(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

/// A binary arithmetic operation.
///
/// Serializes to lowercase operation names (`"add"`, `"divide"`, ...) so
/// callers can name operations inside JSON payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
}

impl Operation {
    /// Apply the operation to a pair of operands.
    ///
    /// Dispatches to the free functions above, so [`Operation::Divide`] and
    /// [`Operation::Remainder`] carry the same zero-divisor guard.
    pub fn apply(self, a: f64, b: f64) -> CalculatorResult<f64> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
            Operation::Remainder => remainder(a, b),
            Operation::Power => Ok(power(a, b)),
        }
    }

    /// Conventional operator token for display.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Remainder => "%",
            Operation::Power => "^",
        }
    }
}
