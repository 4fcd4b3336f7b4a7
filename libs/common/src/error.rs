//! Custom error types for the common library
//!
//! This module defines the errors raised while assembling the service
//! configuration and installing the logging subscriber.

use thiserror::Error;

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// The configuration sources could not be read or deserialized
    #[error("Configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    /// The bind address is not a valid socket address
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    /// The global tracing subscriber could not be installed
    #[error("Logging initialization error: {0}")]
    Logging(String),
}

/// Type alias for Result with ConfigurationError
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
