//! Tracing bootstrap
//!
//! Installs the process-wide `tracing` subscriber. Library code only ever
//! emits through the `tracing` macros; binaries and test harnesses call
//! [`init_tracing`] once at start-up.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Output format for the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Pretty,
    /// Newline-delimited JSON records.
    Json,
}

/// Install the global subscriber.
///
/// `default_directive` is used when `RUST_LOG` is unset or invalid.
/// Returns `false` when a global subscriber was already installed, which
/// is expected when several tests bootstrap logging.
pub fn init_tracing(default_directive: &str, format: LogFormat) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match format {
        LogFormat::Pretty => {
            registry.with(tracing_subscriber::fmt::layer().with_target(true)).try_init()
        }
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init(),
    };

    installed.is_ok()
}
