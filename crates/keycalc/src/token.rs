//! Normalized input tokens
//!
//! Buttons and keyboard keys are mapped to these before they reach the
//! state machine. The string form of every token is its button label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, Operation, ScientificFunction};

/// Control keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// `C`: reset everything
    Reset,
    /// `CE`: clear the current entry
    ClearEntry,
    /// `Del`: delete the last character of the current entry
    Delete,
    /// `=`: evaluate the history
    Evaluate,
}

impl Control {
    /// Returns the key label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Reset => "C",
            Self::ClearEntry => "CE",
            Self::Delete => "Del",
            Self::Evaluate => "=",
        }
    }
}

/// A single unit of calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputToken {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Dot,
    /// Binary operator
    Operator(Operation),
    /// Scientific function
    Function(ScientificFunction),
    /// Control key
    Control(Control),
}

impl InputToken {
    /// Creates a digit token, or `None` if `d` is not a single decimal digit
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns the character a digit or dot token appends to the entry
    #[must_use]
    pub fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Dot => Some('.'),
            _ => None,
        }
    }

    /// Every token the calculator understands, in keypad order
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut tokens: Vec<Self> = (0..=9).map(Self::Digit).collect();
        tokens.push(Self::Dot);
        tokens.extend(Operation::ALL.into_iter().map(Self::Operator));
        tokens.extend(ScientificFunction::ALL.into_iter().map(Self::Function));
        tokens.extend(
            [
                Control::Reset,
                Control::ClearEntry,
                Control::Delete,
                Control::Evaluate,
            ]
            .into_iter()
            .map(Self::Control),
        );
        tokens
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Dot => f.write_str("."),
            Self::Operator(op) => write!(f, "{}", op.symbol()),
            Self::Function(func) => f.write_str(func.label()),
            Self::Control(control) => f.write_str(control.label()),
        }
    }
}

impl FromStr for InputToken {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(d) = ch.to_digit(10) {
                // to_digit(10) is always < 10
                return Ok(Self::Digit(d as u8));
            }
            if ch == '.' {
                return Ok(Self::Dot);
            }
            if let Some(op) = Operation::from_symbol(ch) {
                return Ok(Self::Operator(op));
            }
        }

        if let Some(func) = ScientificFunction::from_label(s) {
            return Ok(Self::Function(func));
        }

        match s {
            "C" => Ok(Self::Control(Control::Reset)),
            "CE" => Ok(Self::Control(Control::ClearEntry)),
            "Del" => Ok(Self::Control(Control::Delete)),
            "=" => Ok(Self::Control(Control::Evaluate)),
            _ => Err(CalcError::UnknownToken(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        for d in 0..=9u8 {
            assert_eq!(d.to_string().parse::<InputToken>(), Ok(InputToken::Digit(d)));
        }
    }

    #[test]
    fn test_parse_operators_use_display_symbols() {
        assert_eq!(
            "×".parse::<InputToken>(),
            Ok(InputToken::Operator(Operation::Multiply))
        );
        assert_eq!(
            "÷".parse::<InputToken>(),
            Ok(InputToken::Operator(Operation::Divide))
        );
        assert!("*".parse::<InputToken>().is_err());
        assert!("/".parse::<InputToken>().is_err());
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(
            "x²".parse::<InputToken>(),
            Ok(InputToken::Function(ScientificFunction::Square))
        );
        assert_eq!(
            "log".parse::<InputToken>(),
            Ok(InputToken::Function(ScientificFunction::Log))
        );
        assert_eq!(
            "e".parse::<InputToken>(),
            Ok(InputToken::Function(ScientificFunction::E))
        );
    }

    #[test]
    fn test_parse_controls() {
        assert_eq!("C".parse::<InputToken>(), Ok(InputToken::Control(Control::Reset)));
        assert_eq!("CE".parse::<InputToken>(), Ok(InputToken::Control(Control::ClearEntry)));
        assert_eq!("Del".parse::<InputToken>(), Ok(InputToken::Control(Control::Delete)));
        assert_eq!("=".parse::<InputToken>(), Ok(InputToken::Control(Control::Evaluate)));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "(".parse::<InputToken>(),
            Err(CalcError::UnknownToken("(".into()))
        );
        assert!("".parse::<InputToken>().is_err());
        assert!("12".parse::<InputToken>().is_err());
        assert!("Enter".parse::<InputToken>().is_err());
    }

    #[test]
    fn test_display_round_trips_for_every_token() {
        let all = InputToken::all();
        assert_eq!(all.len(), 25);
        for token in all {
            assert_eq!(token.to_string().parse::<InputToken>(), Ok(token));
        }
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(InputToken::digit(7), Some(InputToken::Digit(7)));
        assert_eq!(InputToken::digit(10), None);
    }

    #[test]
    fn test_entry_char() {
        assert_eq!(InputToken::Digit(3).entry_char(), Some('3'));
        assert_eq!(InputToken::Dot.entry_char(), Some('.'));
        assert_eq!(InputToken::Control(Control::Evaluate).entry_char(), None);
    }
}
