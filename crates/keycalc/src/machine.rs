//! Expression state machine
//!
//! Owns the history line, the current entry and the bookkeeping that decides
//! how the next key changes them. Every key goes through [`ExpressionMachine::handle`];
//! nothing else mutates the state.
//!
//! Conceptual phases:
//!
//! ```text
//!            digit                 operator
//!   Empty ─────────▶ EnteringOperand ─────────▶ AwaitingOperand
//!                        ▲   │ =                      │ digit
//!                        │   ▼                        │
//!                  digit └ ShowingResult ◀────────────┘ (via =)
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::evaluator::Evaluator;
use crate::core::expression::{promote_trailing_operator, to_evaluator_syntax};
use crate::core::{CalcError, CalcResult, FunctionOutput, Operation, ScientificFunction};
use crate::format::{format_value, group_thousands};
use crate::token::{Control, InputToken};

/// Text shown in the primary display when something cannot be computed
pub const ERROR_MARKER: &str = "Error";

/// Current entry after a reset or clear-entry
const ZERO: &str = "0";

/// Phase of the state machine, derived from its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered yet
    Empty,
    /// Typing an operand
    EnteringOperand,
    /// An operator was just committed
    AwaitingOperand,
    /// A result from `=` is on screen
    ShowingResult,
}

/// The two strings a front-end renders after every key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Primary display: the entry being typed, a result, or `Error`
    pub current_input: String,
    /// Secondary display: the expression built so far
    pub history: String,
}

impl Screen {
    /// Primary display with thousands separators
    #[must_use]
    pub fn grouped_input(&self) -> String {
        group_thousands(&self.current_input)
    }

    /// Returns true if the primary display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.current_input == ERROR_MARKER
    }
}

/// Calculator input state machine
#[derive(Debug, Clone)]
pub struct ExpressionMachine {
    /// In-progress operand
    current_input: String,
    /// Expression built from committed tokens, in display symbols
    history: String,
    /// Set only right after a successful `=`
    result: Option<f64>,
    /// True iff the last character of `history` is a committed operator
    is_operator_last: bool,
    /// Most recently committed operator
    operator: Option<Operation>,
    /// Why the last `=` failed, cleared on the next key
    last_error: Option<CalcError>,
    evaluator: Evaluator,
}

impl Default for ExpressionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionMachine {
    /// Creates a machine in the empty state
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_input: ZERO.to_string(),
            history: String::new(),
            result: None,
            is_operator_last: false,
            operator: None,
            last_error: None,
            evaluator: Evaluator::new(),
        }
    }

    /// Returns the current entry
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Returns the history expression
    #[must_use]
    pub fn history(&self) -> &str {
        &self.history
    }

    /// Returns the last result, if `=` was the most recent state change
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        self.result
    }

    /// Returns true if the history ends in an uncommitted operator
    #[must_use]
    pub const fn is_operator_last(&self) -> bool {
        self.is_operator_last
    }

    /// Returns the most recently committed operator
    #[must_use]
    pub const fn operator(&self) -> Option<Operation> {
        self.operator
    }

    /// Returns why the previous `=` failed, if it did
    #[must_use]
    pub const fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns the conceptual phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.result.is_some() {
            Phase::ShowingResult
        } else if self.is_operator_last {
            Phase::AwaitingOperand
        } else if self.history.is_empty() && self.current_input == ZERO {
            Phase::Empty
        } else {
            Phase::EnteringOperand
        }
    }

    /// Returns both display strings
    #[must_use]
    pub fn screen(&self) -> Screen {
        Screen {
            current_input: self.current_input.clone(),
            history: self.history.clone(),
        }
    }

    /// Dispatches one token and returns the resulting screen
    pub fn handle(&mut self, token: InputToken) -> Screen {
        debug!(%token, phase = ?self.phase(), "handling token");
        self.last_error = None;

        match token {
            InputToken::Control(Control::Reset) => self.reset(),
            InputToken::Control(Control::ClearEntry) => self.clear_entry(),
            InputToken::Control(Control::Delete) => self.delete_last_char(),
            InputToken::Control(Control::Evaluate) => self.evaluate(),
            InputToken::Operator(op) => self.commit_operator(op),
            InputToken::Function(func) => self.commit_function(func),
            InputToken::Digit(_) | InputToken::Dot => {
                if let Some(ch) = token.entry_char() {
                    self.commit_entry_char(ch);
                }
            }
        }

        trace!(
            current_input = %self.current_input,
            history = %self.history,
            operator_last = self.is_operator_last,
            "state updated"
        );
        self.screen()
    }

    /// Parses a button label and dispatches it
    pub fn handle_label(&mut self, label: &str) -> CalcResult<Screen> {
        let token: InputToken = label.parse()?;
        Ok(self.handle(token))
    }

    /// Dispatches a sequence of tokens and returns the final screen
    pub fn run<I>(&mut self, tokens: I) -> Screen
    where
        I: IntoIterator<Item = InputToken>,
    {
        for token in tokens {
            self.handle(token);
        }
        self.screen()
    }

    fn reset(&mut self) {
        self.current_input = ZERO.to_string();
        self.history.clear();
        self.result = None;
        self.operator = None;
        self.is_operator_last = false;
    }

    fn clear_entry(&mut self) {
        self.current_input = ZERO.to_string();
        self.is_operator_last = false;
    }

    /// History is intentionally left alone, so a deleted digit is still
    /// part of the expression that `=` evaluates.
    fn delete_last_char(&mut self) {
        if self.current_input.chars().count() > 1 {
            self.current_input.pop();
        } else {
            self.current_input = ZERO.to_string();
        }
    }

    fn commit_operator(&mut self, op: Operation) {
        if self.result.take().is_some() {
            self.history.clone_from(&self.current_input);
        }

        if self.history.is_empty() && op != Operation::Subtract {
            trace!(%op, "rejecting leading operator");
            return;
        }

        if self.is_operator_last {
            self.history.pop();
        }
        self.history.push(op.symbol());
        self.current_input.clear();
        self.operator = Some(op);
        self.is_operator_last = true;
    }

    fn commit_entry_char(&mut self, ch: char) {
        if self.result.take().is_some() {
            self.current_input = ch.to_string();
            self.history = ch.to_string();
        } else if self.current_input == ZERO && ch != '.' {
            self.current_input = ch.to_string();
        } else if ch == '.' && self.current_input.contains('.') {
            // The entry keeps one point; the history still records the key
            trace!("ignoring second decimal point");
        } else {
            self.current_input.push(ch);
        }

        // Only the very first key of a fresh expression leaves these equal
        if self.history != self.current_input {
            self.history.push(ch);
        }
        self.is_operator_last = false;
    }

    fn commit_function(&mut self, func: ScientificFunction) {
        let n = self.current_input.trim().parse::<f64>().unwrap_or(f64::NAN);
        let output = match func.apply(n) {
            FunctionOutput::Value(value) => format_value(value),
            FunctionOutput::DomainError => {
                debug!(%func, input = n, "function outside its domain");
                ERROR_MARKER.to_string()
            }
        };

        self.history.clone_from(&output);
        self.current_input = output;
        self.is_operator_last = false;
    }

    fn evaluate(&mut self) {
        let mut expression = to_evaluator_syntax(&self.history);
        if self.is_operator_last {
            expression = promote_trailing_operator(&expression);
        }

        match self.evaluator.evaluate_str(&expression) {
            Ok(value) => {
                self.result = Some(value);
                self.current_input = format_value(value);
                self.history.clone_from(&self.current_input);
            }
            Err(err) => {
                debug!(%expression, error = %err, "evaluation failed");
                self.current_input = ERROR_MARKER.to_string();
                self.last_error = Some(err);
            }
        }
        self.is_operator_last = false;
    }
}
