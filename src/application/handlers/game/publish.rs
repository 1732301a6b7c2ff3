//! Best-effort event publication shared by the game command handlers.

use serde::Serialize;

use crate::domain::foundation::{CommandMetadata, DomainEvent, EventEnvelope};
use crate::ports::{EventPublisher, PublishError};

/// Publish `event` tagged with the command's correlation id, user and source.
///
/// The store mutation has already been committed when this runs, so a
/// delivery failure is logged and swallowed rather than reported as a
/// failed command.
pub(super) async fn publish_event<E>(
    publisher: &dyn EventPublisher,
    event: &E,
    metadata: &CommandMetadata,
) where
    E: DomainEvent + Serialize,
{
    if let Err(e) = try_publish(publisher, event, metadata).await {
        tracing::warn!(
            event_type = event.event_type(),
            error = %e,
            "Failed to publish event"
        );
    }
}

async fn try_publish<E>(
    publisher: &dyn EventPublisher,
    event: &E,
    metadata: &CommandMetadata,
) -> Result<(), PublishError>
where
    E: DomainEvent + Serialize,
{
    let mut envelope = EventEnvelope::from_event(event)
        .map_err(|e| PublishError::Serialization(e.to_string()))?
        .with_correlation_id(metadata.correlation_id())
        .with_user_id(metadata.user_id.to_string());
    if let Some(source) = metadata.source() {
        envelope = envelope.with_source(source);
    }

    publisher.publish(envelope).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::game::test_support::*;
    use crate::domain::foundation::{domain_event, EventId, Timestamp};

    struct Unserializable {
        event_id: EventId,
        game: String,
        at: Timestamp,
    }

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("payload rejected"))
        }
    }

    domain_event!(
        Unserializable,
        event_type = "game.broken.v1",
        schema_version = 1,
        aggregate_id = game,
        aggregate_type = "GameSession",
        occurred_at = at,
        event_id = event_id
    );

    fn broken_event() -> Unserializable {
        Unserializable {
            event_id: EventId::new(),
            game: "Chess".to_string(),
            at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn serialization_failure_is_reported_as_publish_error() {
        let publisher = MockEventPublisher::new();

        let result = try_publish(&publisher, &broken_event(), &metadata("host")).await;

        assert!(matches!(result, Err(PublishError::Serialization(msg)) if msg.contains("payload rejected")));
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn publish_event_swallows_serialization_failure() {
        let publisher = MockEventPublisher::new();

        publish_event(&publisher, &broken_event(), &metadata("host")).await;

        assert!(publisher.published_events().is_empty());
    }
}
