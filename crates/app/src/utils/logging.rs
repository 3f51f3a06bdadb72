use std::time::Duration;

use symposium_common::observability::{init_tracing, LogFormat};
use symposium_domain::{LoggingConfig, SymposiumError};
use tracing::{info, warn};

/// Install the global subscriber described by `config`.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let format = if config.json { LogFormat::Json } else { LogFormat::Pretty };
    init_tracing(&config.filter, format)
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` must be a stable identifier without user data.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&SymposiumError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = err.label(),
            error = %err,
            "command_execution_failure"
        ),
    }
}
