//! Tracing setup shared by binaries and tests

use tracing_subscriber::EnvFilter;

/// Initialize tracing with an optional level override
///
/// The override (typically from the CLI) wins over `RUST_LOG`; with neither
/// set the filter defaults to `info`. Safe to call only once per process.
pub fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
