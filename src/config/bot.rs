//! Bot front-end configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Chat-facing settings
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Character(s) that introduce a command, e.g. `!` in `!game open Chess`
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl BotConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Validate bot configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.command_prefix.is_empty() || self.command_prefix.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidCommandPrefix);
        }
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::InvalidLogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

fn default_command_prefix() -> String {
    "!".to_string()
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,game_lobby=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_config_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level, "info,game_lobby=debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_is_production() {
        let mut config = BotConfig::default();
        assert!(!config.is_production());

        config.environment = Environment::Production;
        assert!(config.is_production());
    }

    #[test]
    fn test_validation_invalid_prefix() {
        for prefix in ["", "! ", " "] {
            let config = BotConfig {
                command_prefix: prefix.to_string(),
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ValidationError::InvalidCommandPrefix)
            ));
        }
    }

    #[test]
    fn test_multi_character_prefix_is_valid() {
        let config = BotConfig {
            command_prefix: "bot.".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_blank_log_level() {
        let config = BotConfig {
            log_level: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(_))
        ));
    }
}
