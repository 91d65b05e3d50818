//! Keycalc: keyboard-driven expression calculator
//!
//! ## Usage
//!
//! ```bash
//! keycalc                         # Interactive calculator
//! keycalc press 3 + 4 =           # Print "7"
//! keycalc press '12*3=' --json    # Final display as JSON
//! keycalc press 9 sq --trace      # Display after every key
//! ```

use clap::Parser;
use keycalc_cli::{
    logging, run_interactive, run_press, Cli, CliConfig, CliResult, ColorChoice, Commands,
    Verbosity,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => run_interactive(&config),
        Commands::Press(args) => run_press(&config, &args, &mut std::io::stdout().lock()),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
