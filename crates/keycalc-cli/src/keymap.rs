//! Keyboard to token mapping
//!
//! The calculator core only understands button labels. Keyboards spell some
//! of them differently (`*` for `×`, Enter for `=`), so everything passes
//! through here first.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use keycalc::core::{Operation, ScientificFunction};
use keycalc::{Control, InputToken};

use crate::error::{CliError, CliResult};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a token to the calculator
    Press(InputToken),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Maps key events and key names to calculator tokens
#[derive(Debug, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Creates a new key mapper
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a terminal key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        if event.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'q' | 'd') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        let token = match event.code {
            KeyCode::Char(ch) => Self::map_char(ch),
            KeyCode::Enter => Some(InputToken::Control(Control::Evaluate)),
            KeyCode::Backspace => Some(InputToken::Control(Control::Delete)),
            KeyCode::Esc => Some(InputToken::Control(Control::Reset)),
            KeyCode::Delete => Some(InputToken::Control(Control::ClearEntry)),
            _ => None,
        };
        token.map_or(KeyAction::None, KeyAction::Press)
    }

    /// Maps a single typed character
    ///
    /// Function keys use letters: `s` Sin, `c` Cos, `t` Tan, `l` log,
    /// `q` x², `e` e.
    #[must_use]
    pub fn map_char(ch: char) -> Option<InputToken> {
        if let Some(d) = ch.to_digit(10) {
            return InputToken::digit(d as u8);
        }
        let token = match ch {
            '.' => InputToken::Dot,
            '*' | 'x' | '×' => InputToken::Operator(Operation::Multiply),
            '/' | '÷' => InputToken::Operator(Operation::Divide),
            '+' => InputToken::Operator(Operation::Add),
            '-' => InputToken::Operator(Operation::Subtract),
            '=' => InputToken::Control(Control::Evaluate),
            's' => InputToken::Function(ScientificFunction::Sin),
            'c' => InputToken::Function(ScientificFunction::Cos),
            't' => InputToken::Function(ScientificFunction::Tan),
            'l' => InputToken::Function(ScientificFunction::Log),
            'q' => InputToken::Function(ScientificFunction::Square),
            'e' => InputToken::Function(ScientificFunction::E),
            _ => return None,
        };
        Some(token)
    }

    /// Resolves a key name given on the command line
    ///
    /// Accepts button labels (`×`, `Sin`, `CE`) and keyboard names
    /// (`*`, `Enter`, `Backspace`, `Escape`, `Delete`, `sq`).
    #[must_use]
    pub fn resolve_name(name: &str) -> Option<InputToken> {
        if let Ok(token) = name.parse::<InputToken>() {
            return Some(token);
        }
        let token = match name {
            "*" => InputToken::Operator(Operation::Multiply),
            "/" => InputToken::Operator(Operation::Divide),
            "Enter" => InputToken::Control(Control::Evaluate),
            "Backspace" => InputToken::Control(Control::Delete),
            "Escape" | "Esc" => InputToken::Control(Control::Reset),
            "Delete" => InputToken::Control(Control::ClearEntry),
            "sq" | "x^2" => InputToken::Function(ScientificFunction::Square),
            _ => return None,
        };
        Some(token)
    }

    /// Turns command line key arguments into tokens
    ///
    /// Each argument is a key name; an argument that names no key is split
    /// into single typed characters, so `12+3=` works as one argument.
    pub fn parse_keys<S: AsRef<str>>(args: &[S]) -> CliResult<Vec<InputToken>> {
        let mut tokens = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            if let Some(token) = Self::resolve_name(arg) {
                tokens.push(token);
                continue;
            }
            for ch in arg.chars().filter(|c| !c.is_whitespace()) {
                let token = Self::map_char(ch).ok_or_else(|| CliError::unknown_key(ch))?;
                tokens.push(token);
            }
        }
        if tokens.is_empty() {
            return Err(CliError::invalid_argument("no keys given"));
        }
        Ok(tokens)
    }
}
