//! Minimal logging setup for binaries and tests embedding this crate,
//! built on the `tracing` ecosystem.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests, early startup before full configuration is loaded, or
/// as a fallback. Filters messages based on the `RUST_LOG` environment
/// variable, defaulting to "info" if `RUST_LOG` is not set or is invalid.
/// Errors during initialization (e.g., if a global logger is already set)
/// are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}
