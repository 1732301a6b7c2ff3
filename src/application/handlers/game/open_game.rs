//! OpenGameHandler - Command handler for opening a new game.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, UserId};
use crate::domain::game::{GameError, GameOpened, GameSession};
use crate::ports::{EventPublisher, GameSessionStore};

use super::publish::publish_event;

/// Command to open a game.
#[derive(Debug, Clone)]
pub struct OpenGameCommand {
    pub user_id: UserId,
    pub name: String,
}

/// Result of a successful open.
#[derive(Debug, Clone)]
pub struct OpenGameResult {
    pub game: GameSession,
    pub event: GameOpened,
}

/// Handler for opening games.
pub struct OpenGameHandler {
    store: Arc<dyn GameSessionStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl OpenGameHandler {
    pub fn new(store: Arc<dyn GameSessionStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: OpenGameCommand,
        metadata: CommandMetadata,
    ) -> Result<OpenGameResult, GameError> {
        let game = self.store.open(&cmd.user_id, &cmd.name)?;

        let event = GameOpened {
            event_id: EventId::new(),
            game: game.name().to_string(),
            owner: cmd.user_id,
            opened_at: *game.opened_at(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        tracing::info!(user = %event.owner, game = %event.game, "Game opened");
        Ok(OpenGameResult { game, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::game::test_support::*;

    fn command(user_name: &str, name: &str) -> OpenGameCommand {
        OpenGameCommand {
            user_id: user(user_name),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn opens_game_and_publishes_event() {
        let store = store();
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = OpenGameHandler::new(store.clone(), publisher.clone());

        let result = handler
            .handle(command("host", "Chess"), metadata("host"))
            .await
            .unwrap();

        assert_eq!(result.game.name(), "Chess");
        assert!(store.find("chess").is_some());

        let events = publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "game.opened.v1");
        assert_eq!(events[0].aggregate_id, "Chess");
        assert_eq!(
            events[0].metadata.correlation_id.as_deref(),
            Some("test-correlation-id")
        );
        assert_eq!(events[0].metadata.user_id.as_deref(), Some("host"));
        assert_eq!(events[0].metadata.source.as_deref(), Some("test"));
    }

    #[tokio::test]
    async fn duplicate_name_fails_without_event() {
        let store = store_with_chess();
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = OpenGameHandler::new(store, publisher.clone());

        let result = handler
            .handle(command("other", "CHESS"), metadata("other"))
            .await;

        assert!(matches!(result, Err(GameError::NameInUse { .. })));
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn publish_failure_does_not_undo_open() {
        let store = store();
        let publisher = Arc::new(MockEventPublisher::failing());
        let handler = OpenGameHandler::new(store.clone(), publisher);

        let result = handler
            .handle(command("host", "Chess"), metadata("host"))
            .await;

        assert!(result.is_ok());
        assert!(store.find("Chess").is_some());
    }
}
