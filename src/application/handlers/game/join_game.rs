//! JoinGameHandler - Command handler for joining an open game.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, Timestamp, UserId};
use crate::domain::game::{GameError, JoinedGame, PlayerJoined};
use crate::ports::{EventPublisher, GameSessionStore};

use super::publish::publish_event;

/// Command to join a game by its exact (case-insensitive) name.
#[derive(Debug, Clone)]
pub struct JoinGameCommand {
    pub user_id: UserId,
    pub name: String,
}

/// Result of a successful join.
#[derive(Debug, Clone)]
pub struct JoinGameResult {
    pub joined: JoinedGame,
    pub event: PlayerJoined,
}

/// Handler for joining games.
pub struct JoinGameHandler {
    store: Arc<dyn GameSessionStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl JoinGameHandler {
    pub fn new(store: Arc<dyn GameSessionStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: JoinGameCommand,
        metadata: CommandMetadata,
    ) -> Result<JoinGameResult, GameError> {
        let joined = self.store.join(&cmd.user_id, &cmd.name)?;

        let event = PlayerJoined {
            event_id: EventId::new(),
            game: joined.name.clone(),
            player: cmd.user_id,
            owner: joined.owner.clone(),
            joined_at: Timestamp::now(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        tracing::info!(user = %event.player, game = %event.game, "Player joined game");
        Ok(JoinGameResult { joined, event })
    }
}
