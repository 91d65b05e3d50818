//! Binary operators and checked arithmetic

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// The four binary operators a calculator key can commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the symbol shown in the history display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Returns the symbol understood by the evaluator
    #[must_use]
    pub const fn eval_symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Looks up an operator from its display symbol
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' => Some(Self::Multiply),
            '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Looks up an operator from its evaluator symbol
    #[must_use]
    pub const fn from_eval_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Checked floating point arithmetic
///
/// Every result is rejected unless it is finite, so a division that would
/// produce infinity or NaN never reaches the display.
#[derive(Debug, Default, Clone, Copy)]
pub struct Arithmetic;

impl Arithmetic {
    /// Performs an operation on two operands
    pub fn calculate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_finite(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_finite(a / b)
    }

    /// Rejects NaN and infinite values
    pub fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}
