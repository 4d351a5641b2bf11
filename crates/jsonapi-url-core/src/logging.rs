//! Logging init for programs and tests embedding the parser.
//!
//! The parser itself only emits `tracing` events; nothing is printed unless a
//! subscriber is installed.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,jsonapi_url_core=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to stderr, filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already installed, so it is safe to
/// call from every test.
pub fn init_logging_stderr() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("jsonapi-url logging initialized on stderr");
    }
}
