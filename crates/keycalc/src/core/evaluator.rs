//! AST evaluator

use crate::core::parser::{AstNode, Parser};
use crate::core::{Arithmetic, CalcResult, Operation};

/// Evaluator for AST expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Arithmetic::check_finite(*n),
            AstNode::Negate(inner) => {
                let value = self.evaluate(inner)?;
                Arithmetic::calculate(value, -1.0, Operation::Multiply)
            }
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                Arithmetic::calculate(left_val, right_val, *op)
            }
        }
    }

    /// Evaluates a string expression in evaluator syntax
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}
