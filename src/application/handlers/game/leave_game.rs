//! LeaveGameHandler - Command handler for a player leaving a game.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, Timestamp, UserId};
use crate::domain::game::{GameError, LeftGame, PlayerLeft};
use crate::ports::{EventPublisher, GameSessionStore};

use super::publish::publish_event;

/// Command to leave a game.
#[derive(Debug, Clone)]
pub struct LeaveGameCommand {
    pub user_id: UserId,
    pub name: String,
}

/// Result of a successful leave.
#[derive(Debug, Clone)]
pub struct LeaveGameResult {
    pub left: LeftGame,
    pub event: PlayerLeft,
}

/// Handler for leaving games.
pub struct LeaveGameHandler {
    store: Arc<dyn GameSessionStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl LeaveGameHandler {
    pub fn new(store: Arc<dyn GameSessionStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: LeaveGameCommand,
        metadata: CommandMetadata,
    ) -> Result<LeaveGameResult, GameError> {
        let left = self.store.leave(&cmd.user_id, &cmd.name)?;

        let event = PlayerLeft {
            event_id: EventId::new(),
            game: left.name.clone(),
            player: cmd.user_id,
            left_at: Timestamp::now(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        tracing::info!(user = %event.player, game = %event.game, "Player left game");
        Ok(LeaveGameResult { left, event })
    }
}
