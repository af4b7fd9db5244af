//! Logging initialization

use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Builds the filter: `RUST_LOG` when set, otherwise `level`.
pub fn env_filter(level: LogLevel) -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Installs a global `fmt` subscriber.
///
/// Returns `false` if a global subscriber was already set (e.g. by the host application);
/// the existing one is kept in that case.
pub fn init_tracing(level: LogLevel) -> bool {
  tracing_subscriber::fmt().with_env_filter(env_filter(level)).try_init().is_ok()
}
