//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the serve root exists and is a directory
//! - Validate value ranges (port non-zero, timeout > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::ServeConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("port must be non-zero")]
    PortZero,

    #[error("serve root does not exist: {0}")]
    RootMissing(PathBuf),

    #[error("serve root is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("request timeout must be greater than zero")]
    TimeoutZero,
}

/// Validate a resolved configuration, collecting every violation.
pub fn validate_config(config: &ServeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.port == 0 {
        errors.push(ValidationError::PortZero);
    }

    if !config.root.exists() {
        errors.push(ValidationError::RootMissing(config.root.clone()));
    } else if !config.root.is_dir() {
        errors.push(ValidationError::RootNotDirectory(config.root.clone()));
    }

    if config.request_timeout_secs == 0 {
        errors.push(ValidationError::TimeoutZero);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
