//! Diagnostic logging setup.
//!
//! User-facing output goes through `ui::messages`; everything here is the
//! diagnostic channel (persistence failures, skipped records, recovery
//! decisions) and is written to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log level.
pub const LOG_ENV: &str = "RDOWNTIME_LOG";

/// Filter precedence: `RDOWNTIME_LOG` > `level` (from config) > `warn`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Safe to call more than once: later calls
/// are ignored.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
