//! Single-operand scientific functions
//!
//! These collapse the current entry to a scalar immediately; they never
//! become part of the history expression.

use serde::{Deserialize, Serialize};

/// Scientific keys that act on the current entry alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScientificFunction {
    /// Sine (radians)
    Sin,
    /// Cosine (radians)
    Cos,
    /// Tangent (radians)
    Tan,
    /// Natural logarithm, defined for positive input only
    Log,
    /// Square (x²)
    Square,
    /// Euler's number, ignores its input
    E,
}

/// Output of a scientific function
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FunctionOutput {
    /// A numeric value (may be NaN when the input was not a number)
    Value(f64),
    /// The input is outside the function's domain
    DomainError,
}

impl ScientificFunction {
    /// All functions in keypad order
    pub const ALL: [Self; 6] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log,
        Self::Square,
        Self::E,
    ];

    /// Returns the key label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sin => "Sin",
            Self::Cos => "Cos",
            Self::Tan => "Tan",
            Self::Log => "log",
            Self::Square => "x²",
            Self::E => "e",
        }
    }

    /// Looks up a function by its key label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Applies the function to `n`
    #[must_use]
    pub fn apply(&self, n: f64) -> FunctionOutput {
        match self {
            Self::Sin => FunctionOutput::Value(n.sin()),
            Self::Cos => FunctionOutput::Value(n.cos()),
            Self::Tan => FunctionOutput::Value(n.tan()),
            // NaN fails the comparison as well
            Self::Log if n > 0.0 => FunctionOutput::Value(n.ln()),
            Self::Log => FunctionOutput::DomainError,
            Self::Square => FunctionOutput::Value(n * n),
            Self::E => FunctionOutput::Value(std::f64::consts::E),
        }
    }
}

impl std::fmt::Display for ScientificFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
