//! Logging setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Log;

const DEFAULT_FILTER: &str = "signup=info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter.
pub fn setup_tracing(config: &Log) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.filter.as_deref().unwrap_or(DEFAULT_FILTER))
    });

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr, stdout carries responses.
    if config.json {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init()
    }
}
