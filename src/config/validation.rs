//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one channel is required (--channel)")]
    MissingChannels,
    #[error("bot name is required (--name)")]
    MissingName,
    #[error("invalid channel name: {0:?}")]
    InvalidChannel(String),
    #[error("DWARFBOT_PORT is not a valid port: {0:?}")]
    InvalidEnvPort(String),
    #[error("at least one alias is required")]
    MissingAliases,
}

/// Validate a configuration, returning all errors found.
///
/// An empty server or a zero port is left for the session to reject, so
/// that the failure surfaces exactly where the connection would be dialed.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.name.trim().is_empty() {
        errors.push(ValidationError::MissingName);
    }

    if config.channels.is_empty() {
        errors.push(ValidationError::MissingChannels);
    }
    for channel in &config.channels {
        if !is_valid_channel(channel) {
            errors.push(ValidationError::InvalidChannel(channel.clone()));
        }
    }

    if config.aliases.iter().all(|a| a.trim().is_empty()) {
        errors.push(ValidationError::MissingAliases);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Channel logins: non-empty, no whitespace, no `,` or `#`.
fn is_valid_channel(channel: &str) -> bool {
    !channel.is_empty()
        && !channel
            .chars()
            .any(|c| c.is_whitespace() || c == ',' || c == '#' || c.is_control())
}
