//! EventPublisher port - Interface for publishing domain events.
//!
//! The application layer publishes game events without knowing whether
//! they end up in an in-process bus, a chat channel relay or a log.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::EventEnvelope;

/// Failure to hand an event to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("event could not be serialized: {0}")]
    Serialization(String),

    #[error("event transport unavailable: {0}")]
    Unavailable(String),
}

/// Port for publishing domain events.
///
/// # Example
///
/// ```ignore
/// let envelope = EventEnvelope::from_event(&event)?;
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), PublishError>;
}
