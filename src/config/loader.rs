//! Configuration loading and resolution.
//!
//! Settings are resolved in three layers: built-in defaults, an optional
//! TOML config file, then command-line overrides. The merged result is
//! validated before it is accepted into the system.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{FileConfig, Overrides, ServeConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {}", format_violations(.0))]
    Validation(Vec<ValidationError>),
}

fn format_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load a [`FileConfig`] from a TOML file.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let file: FileConfig = toml::from_str(&content)?;
    Ok(file)
}

/// Merge defaults, file values, and CLI overrides into a validated
/// [`ServeConfig`].
pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<ServeConfig, ConfigError> {
    let defaults = ServeConfig::default();

    let config = ServeConfig {
        port: overrides.port.or(file.port).unwrap_or(defaults.port),
        root: overrides.root.or(file.root).unwrap_or(defaults.root),
        request_timeout_secs: file
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        log_level: if overrides.verbose {
            "debug".to_string()
        } else {
            file.log_level.unwrap_or(defaults.log_level)
        },
    };

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
