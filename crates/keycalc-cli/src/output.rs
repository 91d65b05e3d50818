//! Display rendering for the terminal and for scripts

use console::Style;
use keycalc::{ExpressionMachine, InputToken, Phase, Screen};
use serde::Serialize;

use crate::config::CliConfig;

/// Width of the calculator display in the interactive view
pub const DISPLAY_WIDTH: usize = 24;

/// Renders calculator screens as text
#[derive(Debug, Clone)]
pub struct Renderer {
    use_color: bool,
    grouping: bool,
}

impl Renderer {
    /// Create a renderer from the CLI configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            use_color: config.color.should_color(),
            grouping: config.grouping,
        }
    }

    /// Create a renderer with explicit settings
    #[must_use]
    pub const fn with_settings(use_color: bool, grouping: bool) -> Self {
        Self {
            use_color,
            grouping,
        }
    }

    /// Primary display text, grouped unless disabled
    #[must_use]
    pub fn primary(&self, screen: &Screen) -> String {
        if self.grouping {
            screen.grouped_input()
        } else {
            screen.current_input.clone()
        }
    }

    fn paint(&self, style: &Style, text: &str) -> String {
        if self.use_color {
            style.clone().force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn primary_style(screen: &Screen) -> Style {
        if screen.is_error() {
            Style::new().red().bold()
        } else {
            Style::new().bold()
        }
    }

    /// The two display rows, right-aligned to `width` like a calculator
    #[must_use]
    pub fn display_rows(&self, screen: &Screen, width: usize) -> [String; 2] {
        let history = format!("{:>width$}", screen.history);
        let primary = format!("{:>width$}", self.primary(screen));
        [
            self.paint(&Style::new().dim(), &history),
            self.paint(&Self::primary_style(screen), &primary),
        ]
    }

    /// Final display for `press`: history then the primary display
    ///
    /// In quiet mode only the primary display is printed.
    #[must_use]
    pub fn summary(&self, screen: &Screen, quiet: bool) -> String {
        let primary = self.paint(&Self::primary_style(screen), &self.primary(screen));
        if quiet || screen.history.is_empty() {
            primary
        } else {
            format!("{}\n{primary}", self.paint(&Style::new().dim(), &screen.history))
        }
    }

    /// One line of `--trace` output
    #[must_use]
    pub fn trace_line(&self, token: InputToken, screen: &Screen) -> String {
        let key = format!("{:>4}", token.to_string());
        format!(
            "{}  {:<20} {}",
            self.paint(&Style::new().cyan(), &key),
            screen.history,
            self.primary(screen)
        )
    }
}

/// Machine-readable snapshot of the calculator after a key sequence
#[derive(Debug, Clone, Serialize)]
pub struct ScreenReport {
    /// Primary display, unformatted
    pub current_input: String,
    /// Secondary display
    pub history: String,
    /// Primary display as rendered (grouped unless `--raw`)
    pub display: String,
    /// Lifecycle phase
    pub phase: Phase,
    /// Numeric value of the last successful `=`
    pub result: Option<f64>,
    /// Why the display shows `Error`, if it does
    pub error: Option<String>,
}

impl ScreenReport {
    /// Snapshot the machine
    #[must_use]
    pub fn capture(machine: &ExpressionMachine, renderer: &Renderer) -> Self {
        let screen = machine.screen();
        Self {
            display: renderer.primary(&screen),
            current_input: screen.current_input,
            history: screen.history,
            phase: machine.phase(),
            result: machine.result(),
            error: machine.last_error().map(ToString::to_string),
        }
    }
}
