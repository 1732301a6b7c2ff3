//! Game registry limits

use serde::Deserialize;

use super::error::ValidationError;

/// Largest limits accepted by validation.
const MAX_NAME_LENGTH: usize = 200;
const MAX_DESCRIPTION_LENGTH: usize = 4000;

/// Limits applied to games and the event history
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Longest accepted game name, in characters
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Longest accepted description, in characters
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,

    /// How many published events the in-memory bus retains
    #[serde(default = "default_event_history_limit")]
    pub event_history_limit: usize,
}

impl RegistryConfig {
    /// Validate registry limits
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_name_length == 0 || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ValidationError::InvalidNameLength {
                max: MAX_NAME_LENGTH,
            });
        }
        if self.max_description_length == 0 || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ValidationError::InvalidDescriptionLength {
                max: MAX_DESCRIPTION_LENGTH,
            });
        }
        if self.event_history_limit == 0 {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            max_description_length: default_max_description_length(),
            event_history_limit: default_event_history_limit(),
        }
    }
}

fn default_max_name_length() -> usize {
    100
}

fn default_max_description_length() -> usize {
    1000
}

fn default_event_history_limit() -> usize {
    1000
}
