//! Service configuration
//!
//! Settings are assembled from built-in defaults overridden by environment
//! variables carrying the `MERGINGTON_` prefix, e.g.
//! `MERGINGTON_BIND_ADDRESS=127.0.0.1:9000`.

use std::net::SocketAddr;
use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::{ConfigurationError, ConfigurationResult};

/// Prefix shared by every environment variable the service reads
pub const ENV_PREFIX: &str = "MERGINGTON";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_CREDENTIALS_PATH: &str = "teacher_credentials.json";
const DEFAULT_STATIC_DIR: &str = "static";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP listener binds to
    pub bind_address: String,
    /// JSON file holding the teacher credentials
    pub credentials_path: PathBuf,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Create a new AppConfig from the process environment
    pub fn from_env() -> ConfigurationResult<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Create a new AppConfig from an explicit environment source
    ///
    /// Tests hand in an `Environment` backed by a fixed map instead of the
    /// real process environment.
    pub fn from_environment(environment: Environment) -> ConfigurationResult<Self> {
        let config = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("credentials_path", DEFAULT_CREDENTIALS_PATH)?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .add_source(environment)
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.socket_addr()?;

        Ok(app_config)
    }

    /// Parse the configured bind address
    pub fn socket_addr(&self) -> ConfigurationResult<SocketAddr> {
        self.bind_address
            .parse()
            .map_err(|_| ConfigurationError::InvalidBindAddress(self.bind_address.clone()))
    }
}
