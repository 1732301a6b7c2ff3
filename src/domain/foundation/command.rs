//! Command metadata shared by all command handlers.
//!
//! Handlers accept a single `CommandMetadata` instead of loose
//! `user_id` / `correlation_id` / `source` parameters, and propagate it
//! onto the events they publish.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
///
/// # Example
///
/// ```ignore
/// let metadata = CommandMetadata::new(user.clone()).with_source("console");
/// handler.handle(cmd, metadata).await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The user issuing this command.
    pub user_id: UserId,

    /// Links related operations across a single chat command.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Where the command came from (e.g., "console", "discord").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata for the given user.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture for the given user name.
    pub fn test_fixture(user: &str) -> Self {
        Self::new(UserId::new(user).unwrap())
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_with_user_id() {
        let user_id = UserId::new("user-123").unwrap();
        let metadata = CommandMetadata::new(user_id.clone());

        assert_eq!(metadata.user_id, user_id);
        assert!(metadata.correlation_id.is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn explicit_correlation_id_is_stable() {
        let metadata = CommandMetadata::new(UserId::new("user").unwrap())
            .with_correlation_id("corr-123");

        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.correlation_id(), "corr-123");
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new(UserId::new("user").unwrap());
        assert!(!metadata.correlation_id().is_empty());
    }

    #[test]
    fn with_source_sets_source() {
        let metadata = CommandMetadata::new(UserId::new("user").unwrap()).with_source("console");
        assert_eq!(metadata.source(), Some("console"));
    }
}
