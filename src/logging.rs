//! Structured logging setup
//!
//! Library code only emits `tracing` events; hosts that want them printed call
//! [`setup_logging`] once at startup.

use crate::{Error, Result};
use tracing::debug;

/// Set up structured logging to stderr
///
/// `RUST_LOG` takes precedence; otherwise events from this crate at `level`
/// and above are shown. Quiet mode drops timestamps and uses the compact format.
///
/// # Errors
/// Returns `Error::Configuration` when a global subscriber is already installed.
pub fn setup_logging(level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("logbook_processor={}", level)));

    let installed = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", level);
    Ok(())
}
