//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GAME_LOBBY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use game_lobby::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Commands start with {}", config.bot.command_prefix);
//! ```

mod bot;
mod error;
mod registry;

pub use bot::{BotConfig, Environment};
pub use error::{ConfigError, ValidationError};
pub use registry::RegistryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every field has a default, so an empty environment loads.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chat front-end configuration (prefix, environment, logging)
    #[serde(default)]
    pub bot: BotConfig,

    /// Game registry limits
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GAME_LOBBY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GAME_LOBBY__BOT__COMMAND_PREFIX=?` -> `bot.command_prefix = "?"`
    /// - `GAME_LOBBY__REGISTRY__MAX_NAME_LENGTH=50` -> `registry.max_name_length = 50`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GAME_LOBBY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bot.validate()?;
        self.registry.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.bot.is_production()
    }
}
