//! Common library for the Mergington activities service
//!
//! This crate provides the ambient pieces shared by the services: configuration
//! loading, logging setup and the associated error types.
//!
//! ```rust,no_run
//! use common::config::AppConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     common::logging::init()?;
//!     let config = AppConfig::from_env()?;
//!     println!("Listening on {}", config.socket_addr()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
