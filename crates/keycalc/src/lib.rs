//! keycalc - keypad calculator core
//!
//! Turns button and keyboard presses into an arithmetic expression and
//! evaluates it on demand. Front-ends map raw input to an [`InputToken`],
//! call [`ExpressionMachine::handle`] and render the returned [`Screen`].
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut machine = ExpressionMachine::new();
//! for label in ["1", "2", "+", "3", "0", "="] {
//!     machine.handle_label(label).unwrap();
//! }
//! assert_eq!(machine.current_input(), "42");
//! assert_eq!(machine.history(), "42");
//!
//! // The arithmetic evaluator can also be used on its own
//! let eval = Evaluator::new();
//! assert_eq!(eval.evaluate_str("2+3*4").unwrap(), 14.0);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod format;
pub mod machine;
pub mod token;

pub use crate::core::{CalcError, CalcResult};
pub use crate::machine::{ExpressionMachine, Phase, Screen, ERROR_MARKER};
pub use crate::token::{Control, InputToken};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        Arithmetic, CalcError, CalcResult, FunctionOutput, Operation, ScientificFunction,
    };
    pub use crate::format::{format_value, group_thousands};
    pub use crate::machine::{ExpressionMachine, Phase, Screen, ERROR_MARKER};
    pub use crate::token::{Control, InputToken};
}
