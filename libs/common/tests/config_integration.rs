//! Integration tests for configuration loading
//!
//! These tests verify that environment overrides reach the typed
//! configuration the services start from.

use std::path::PathBuf;

use common::config::{AppConfig, ENV_PREFIX};
use config::Environment;

/// Overrides for every key are picked up and the untouched ones keep their defaults
#[test]
fn test_environment_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let source = [
        ("MERGINGTON_BIND_ADDRESS", "127.0.0.1:9000"),
        ("MERGINGTON_CREDENTIALS_PATH", "/etc/mergington/teachers.json"),
        ("UNRELATED_STATIC_DIR", "/ignored"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let environment = Environment::with_prefix(ENV_PREFIX).source(Some(source));
    let config = AppConfig::from_environment(environment)?;

    assert_eq!(config.socket_addr()?.to_string(), "127.0.0.1:9000");
    assert_eq!(
        config.credentials_path,
        PathBuf::from("/etc/mergington/teachers.json")
    );
    assert_eq!(config.static_dir, PathBuf::from("static"));

    Ok(())
}
