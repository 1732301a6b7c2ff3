//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Command prefix must be non-empty and contain no whitespace")]
    InvalidCommandPrefix,

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),

    #[error("Maximum game name length must be between 1 and {max}")]
    InvalidNameLength { max: usize },

    #[error("Maximum description length must be between 1 and {max}")]
    InvalidDescriptionLength { max: usize },

    #[error("Event history limit must be at least 1")]
    InvalidHistoryLimit,
}
