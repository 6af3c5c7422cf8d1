//! Subscriber setup for the command-line tool

use msgbridge_core::LogLevel;
use tracing_subscriber::EnvFilter;

/// Filter for `level`, unless `RUST_LOG` is set
pub fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()))
}

/// Install a stderr fmt subscriber
///
/// Does nothing when a global subscriber is already installed.
pub fn init(level: LogLevel) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("Subscriber already installed");
    }
}
