//! Structured logging initialization via `tracing`.

use tracing_subscriber::EnvFilter;

/// Install a formatted `tracing` subscriber for the process.
///
/// Respects the `RUST_LOG` environment variable for filtering and defaults to
/// `info`. Calling it again after a subscriber is installed does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
