//! Arithmetic core: operators, tokenizer, parser and evaluator
//!
//! Everything here works on plain evaluator syntax (`+ - * /`). The
//! expression state machine translates its display history into this
//! syntax before handing it over.

pub mod evaluator;
pub mod expression;
pub mod functions;
mod operations;
pub mod parser;

pub use functions::{FunctionOutput, ScientificFunction};
pub use operations::{Arithmetic, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Empty expression provided
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid result (NaN or other)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// Input label that does not name any calculator key
    #[error("Unknown token: '{0}'")]
    UnknownToken(String),
}

impl CalcError {
    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert_eq!(
            CalcError::Overflow.to_string(),
            "Overflow: result exceeds maximum value"
        );
    }

    #[test]
    fn test_calc_error_display_parse_error() {
        let err = CalcError::parse("unexpected token");
        assert_eq!(err.to_string(), "Invalid expression: unexpected token");
    }

    #[test]
    fn test_calc_error_display_unknown_token() {
        let err = CalcError::UnknownToken("sqrt".into());
        assert_eq!(err.to_string(), "Unknown token: 'sqrt'");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }
}
