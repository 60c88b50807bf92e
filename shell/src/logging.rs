//! Logging initialization.
//!
//! Filter directives come from `MOSAIC_LOG`; `info` when unset or invalid.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "MOSAIC_LOG";

/// Installs the global subscriber. Call once, at startup.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
