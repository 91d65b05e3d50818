//! Keycalc CLI library
//!
//! Terminal front-end for the `keycalc` expression machine: an interactive
//! raw-mode calculator and a batch `press` command for scripts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod interactive;
pub mod keymap;
pub mod logging;
mod output;
pub mod press;

pub use commands::{Cli, ColorArg, Commands, PressArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use interactive::run_interactive;
pub use keymap::{KeyAction, KeyMapper};
pub use output::{Renderer, ScreenReport, DISPLAY_WIDTH};
pub use press::run_press;
