//! CloseGameHandler - Command handler for closing a game.
//!
//! Closing removes the game and releases every member, host included.
//! The result carries the evicted players so the caller can notify them.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, EventId, Timestamp, UserId};
use crate::domain::game::{ClosedGame, GameClosed, GameError};
use crate::ports::{EventPublisher, GameSessionStore};

use super::publish::publish_event;

/// Command to close a game.
#[derive(Debug, Clone)]
pub struct CloseGameCommand {
    pub user_id: UserId,
    pub name: String,
}

/// Result of a successful close.
#[derive(Debug, Clone)]
pub struct CloseGameResult {
    pub closed: ClosedGame,
    pub event: GameClosed,
}

/// Handler for closing games.
pub struct CloseGameHandler {
    store: Arc<dyn GameSessionStore>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CloseGameHandler {
    pub fn new(store: Arc<dyn GameSessionStore>, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CloseGameCommand,
        metadata: CommandMetadata,
    ) -> Result<CloseGameResult, GameError> {
        let closed = self.store.close(&cmd.user_id, &cmd.name)?;

        let event = GameClosed {
            event_id: EventId::new(),
            game: closed.name.clone(),
            owner: cmd.user_id,
            players: closed.players(),
            closed_at: Timestamp::now(),
        };
        publish_event(self.event_publisher.as_ref(), &event, &metadata).await;

        tracing::info!(
            user = %event.owner,
            game = %event.game,
            evicted = event.players.len(),
            "Game closed"
        );
        Ok(CloseGameResult { closed, event })
    }
}
