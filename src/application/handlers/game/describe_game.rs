//! DescribeGameHandler - Command handler for setting a game's description.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, Timestamp, UserId};
use crate::domain::game::{GameDescriptionUpdated, GameError, GameSession};
use crate::ports::{EventPublisher, GameSessionStore};

use super::publish::publish_event;

/// Command to replace a game's description.
#[derive(Debug, Clone)]
pub struct DescribeGameCommand {
    pub user_id: UserId,
    pub name: String,
    pub description: String,
}

/// Result of a successful description update.
#[derive(Debug, Clone)]
pub struct DescribeGameResult {
    pub game: GameSession,
    pub event: GameDescriptionUpdated,
}

/// Handler for describing games.
pub struct DescribeGameHandler {
    store: Arc<dyn GameSessionStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DescribeGameHandler {
    pub fn new(store: Arc<dyn GameSessionStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: DescribeGameCommand,
        metadata: CommandMetadata,
    ) -> Result<DescribeGameResult, GameError> {
        let described = self
            .store
            .set_description(&cmd.user_id, &cmd.name, &cmd.description)?;
        let game = described.game;

        let event = GameDescriptionUpdated {
            event_id: EventId::new(),
            game: game.name().to_string(),
            owner: cmd.user_id,
            old_description: described.previous,
            new_description: cmd.description,
            updated_at: Timestamp::now(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        tracing::info!(user = %event.owner, game = %event.game, "Game description updated");
        Ok(DescribeGameResult { game, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryGameSessionStore;
    use crate::application::handlers::game::test_support::*;
    use crate::domain::game::{ClosedGame, DescribedGame, GameSummary, JoinedGame, LeftGame};

    /// Store where another host edit lands just before each description
    /// update, inside the same registry.
    struct InterleavedEditStore {
        inner: InMemoryGameSessionStore,
    }

    impl GameSessionStore for InterleavedEditStore {
        fn open(&self, owner: &UserId, name: &str) -> Result<GameSession, GameError> {
            self.inner.open(owner, name)
        }
        fn join(&self, user: &UserId, name: &str) -> Result<JoinedGame, GameError> {
            self.inner.join(user, name)
        }
        fn leave(&self, user: &UserId, name: &str) -> Result<LeftGame, GameError> {
            self.inner.leave(user, name)
        }
        fn set_description(
            &self,
            owner: &UserId,
            name: &str,
            text: &str,
        ) -> Result<DescribedGame, GameError> {
            self.inner.set_description(owner, name, "Concurrent edit")?;
            self.inner.set_description(owner, name, text)
        }
        fn close(&self, owner: &UserId, name: &str) -> Result<ClosedGame, GameError> {
            self.inner.close(owner, name)
        }
        fn list_all(&self) -> Vec<GameSummary> {
            self.inner.list_all()
        }
        fn find_by_prefix(&self, prefix: &str) -> Vec<GameSession> {
            self.inner.find_by_prefix(prefix)
        }
        fn find(&self, name: &str) -> Option<GameSession> {
            self.inner.find(name)
        }
        fn find_by_member(&self, user: &UserId) -> Option<GameSession> {
            self.inner.find_by_member(user)
        }
    }

    fn command(user_name: &str, text: &str) -> DescribeGameCommand {
        DescribeGameCommand {
            user_id: user(user_name),
            name: "Chess".to_string(),
            description: text.to_string(),
        }
    }

    #[tokio::test]
    async fn host_sets_description_and_event_records_change() {
        let store = store_with_chess();
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = DescribeGameHandler::new(store.clone(), publisher.clone());

        handler
            .handle(command("host", "Bring snacks"), metadata("host"))
            .await
            .unwrap();
        let result = handler
            .handle(command("host", "Room 4"), metadata("host"))
            .await
            .unwrap();

        assert_eq!(result.game.description(), Some("Room 4"));
        assert_eq!(result.event.old_description.as_deref(), Some("Bring snacks"));
        assert_eq!(store.find("Chess").unwrap().description(), Some("Room 4"));
        assert_eq!(
            publisher.published_events()[1].event_type,
            "game.description_updated.v1"
        );
    }

    #[tokio::test]
    async fn player_cannot_describe() {
        let store = store_with_chess();
        store.join(&user("a"), "Chess").unwrap();
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = DescribeGameHandler::new(store, publisher.clone());

        let result = handler.handle(command("a", "mine"), metadata("a")).await;

        assert_eq!(result.unwrap_err(), GameError::not_owner("Chess"));
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn event_records_the_description_actually_replaced() {
        let inner = InMemoryGameSessionStore::new();
        inner.open(&user("host"), "Chess").unwrap();
        inner
            .set_description(&user("host"), "Chess", "Bring snacks")
            .unwrap();
        let store = Arc::new(InterleavedEditStore { inner });
        let handler = DescribeGameHandler::new(store.clone(), Arc::new(MockEventPublisher::new()));

        let result = handler
            .handle(command("host", "Room 4"), metadata("host"))
            .await
            .unwrap();

        assert_eq!(
            result.event.old_description.as_deref(),
            Some("Concurrent edit")
        );
        assert_eq!(store.find("Chess").unwrap().description(), Some("Room 4"));
    }
}
