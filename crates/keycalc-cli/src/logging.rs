//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the log filter: `RUST_LOG` when set, otherwise the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Installs the global subscriber writing to stderr
///
/// Returns `false` if a subscriber was already installed.
pub fn init(verbosity: Verbosity) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}
