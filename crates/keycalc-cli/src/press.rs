//! Batch mode: press keys from the command line

use std::io::Write;

use keycalc::ExpressionMachine;
use tracing::info;

use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::keymap::KeyMapper;
use crate::output::{Renderer, ScreenReport};

/// Runs the `press` command, writing the display to `out`
pub fn run_press<W: Write>(config: &CliConfig, args: &PressArgs, out: &mut W) -> CliResult<()> {
    let tokens = KeyMapper::parse_keys(&args.keys)?;
    info!(keys = tokens.len(), "pressing keys");

    let config = config.clone().with_grouping(config.grouping && !args.raw);
    let renderer = Renderer::new(&config);
    let mut machine = ExpressionMachine::new();

    for token in tokens {
        let screen = machine.handle(token);
        if args.trace && !args.json {
            writeln!(out, "{}", renderer.trace_line(token, &screen))?;
        }
    }

    if let Some(error) = machine.last_error() {
        info!(%error, "evaluation failed");
    }

    if args.json {
        let report = ScreenReport::capture(&machine, &renderer);
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else if !args.trace {
        let summary = renderer.summary(&machine.screen(), config.verbosity.is_quiet());
        writeln!(out, "{summary}")?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, Verbosity};
    use crate::error::CliError;

    fn args(keys: &[&str]) -> PressArgs {
        PressArgs {
            keys: keys.iter().map(ToString::to_string).collect(),
            json: false,
            trace: false,
            raw: false,
        }
    }

    fn plain() -> CliConfig {
        CliConfig::new().with_color(ColorChoice::Never)
    }

    fn press(config: &CliConfig, args: &PressArgs) -> String {
        let mut out = Vec::new();
        run_press(config, args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_press_prints_history_and_result() {
        assert_eq!(press(&plain(), &args(&["3", "+", "4", "="])), "7\n7\n");
    }

    #[test]
    fn test_press_mid_expression() {
        assert_eq!(press(&plain(), &args(&["12*3"])), "12×3\n3\n");
    }

    #[test]
    fn test_press_grouping_and_raw() {
        let keys = ["1000", "*", "1000", "="];
        assert_eq!(press(&plain(), &args(&keys)), "1000000\n1,000,000\n");

        let mut raw = args(&keys);
        raw.raw = true;
        assert_eq!(press(&plain(), &raw), "1000000\n1000000\n");
    }

    #[test]
    fn test_press_quiet_prints_primary_only() {
        let config = plain().with_verbosity(Verbosity::Quiet);
        assert_eq!(press(&config, &args(&["8", "/", "0", "="])), "Error\n");
    }

    #[test]
    fn test_press_trace() {
        let mut trace = args(&["5", "*", "2", "="]);
        trace.trace = true;
        let output = press(&plain(), &trace);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("5×"));
        assert!(lines[3].ends_with("10"));
    }

    #[test]
    fn test_press_json() {
        let mut json = args(&["2", "x²", "+", "1", "="]);
        json.json = true;
        let output = press(&plain(), &json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["current_input"], "5");
        assert_eq!(value["history"], "5");
        assert_eq!(value["phase"], "ShowingResult");
        assert_eq!(value["result"], 5.0);
        assert!(value["error"].is_null());
    }

    #[test]
    fn test_press_unknown_key() {
        let mut out = Vec::new();
        let err = run_press(&plain(), &args(&["2", "%"]), &mut out).unwrap_err();
        assert!(matches!(err, CliError::UnknownKey { .. }));
        assert!(out.is_empty());
    }
}
