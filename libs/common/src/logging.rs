//! Logging setup shared by the services

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{ConfigurationError, ConfigurationResult};

/// Install the global tracing subscriber
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
pub fn init() -> ConfigurationResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ConfigurationError::Logging(e.to_string()))
}
