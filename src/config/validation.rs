//! Configuration validation.
//!
//! Validates configuration at load time to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("nickname is required")]
    MissingNickname,
    #[error("nickname must not contain spaces, got '{0}'")]
    InvalidNickname(String),
    #[error("at least one [[server]] block is required")]
    NoServers,
    #[error("server #{0} has an empty host")]
    EmptyHost(usize),
    #[error("server {0} has port 0")]
    InvalidPort(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.nickname.is_empty() {
        errors.push(ValidationError::MissingNickname);
    } else if config.nickname.contains(' ') {
        errors.push(ValidationError::InvalidNickname(config.nickname.clone()));
    }

    if config.servers.is_empty() {
        errors.push(ValidationError::NoServers);
    }
    for (i, server) in config.servers.iter().enumerate() {
        if server.host.is_empty() {
            errors.push(ValidationError::EmptyHost(i));
        }
        if server.port == 0 {
            errors.push(ValidationError::InvalidPort(server.host.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
