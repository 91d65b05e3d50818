//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Keycalc: keyboard-driven expression calculator
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run (defaults to `interactive`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the calculator in the terminal
    ///
    /// Keys: digits, `.`, `+ - * /`, Enter or `=` to evaluate, Backspace to
    /// delete, Delete to clear the entry, Esc to reset. Function keys are
    /// `s` Sin, `c` Cos, `t` Tan, `l` log, `q` x², `e` e. Ctrl+C quits.
    Interactive,

    /// Press a sequence of keys and print the final display
    Press(PressArgs),
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Keys to press: button labels (`×`, `Sin`, `CE`), keyboard names
    /// (`*`, `Enter`, `Backspace`) or compact runs like `12+3=`
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the final display as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Do not insert thousands separators
    #[arg(long)]
    pub raw: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
