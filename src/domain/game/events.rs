//! Game-session domain events.
//!
//! - `GameOpened` - A host opened a new game
//! - `PlayerJoined` - A player joined a game
//! - `PlayerLeft` - A player left a game
//! - `GameDescriptionUpdated` - The host changed the description
//! - `GameClosed` - The host closed the game, evicting all players

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Timestamp, UserId};

// ════════════════════════════════════════════════════════════════════════════
// GameOpened
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameOpened {
    pub event_id: EventId,
    pub game: String,
    pub owner: UserId,
    pub opened_at: Timestamp,
}

domain_event!(
    GameOpened,
    event_type = "game.opened.v1",
    schema_version = 1,
    aggregate_id = game,
    aggregate_type = "GameSession",
    occurred_at = opened_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PlayerJoined
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerJoined {
    pub event_id: EventId,
    pub game: String,
    pub player: UserId,
    pub owner: UserId,
    pub joined_at: Timestamp,
}

domain_event!(
    PlayerJoined,
    event_type = "game.player_joined.v1",
    schema_version = 1,
    aggregate_id = game,
    aggregate_type = "GameSession",
    occurred_at = joined_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// PlayerLeft
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLeft {
    pub event_id: EventId,
    pub game: String,
    pub player: UserId,
    pub left_at: Timestamp,
}

domain_event!(
    PlayerLeft,
    event_type = "game.player_left.v1",
    schema_version = 1,
    aggregate_id = game,
    aggregate_type = "GameSession",
    occurred_at = left_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// GameDescriptionUpdated
// ════════════════════════════════════════════════════════════════════════════

/// Captures both old and new description for the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDescriptionUpdated {
    pub event_id: EventId,
    pub game: String,
    pub owner: UserId,
    pub old_description: Option<String>,
    pub new_description: String,
    pub updated_at: Timestamp,
}

domain_event!(
    GameDescriptionUpdated,
    event_type = "game.description_updated.v1",
    schema_version = 1,
    aggregate_id = game,
    aggregate_type = "GameSession",
    occurred_at = updated_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// GameClosed
// ════════════════════════════════════════════════════════════════════════════

/// `players` lists everyone who was evicted, host excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameClosed {
    pub event_id: EventId,
    pub game: String,
    pub owner: UserId,
    pub players: Vec<UserId>,
    pub closed_at: Timestamp,
}

domain_event!(
    GameClosed,
    event_type = "game.closed.v1",
    schema_version = 1,
    aggregate_id = game,
    aggregate_type = "GameSession",
    occurred_at = closed_at,
    event_id = event_id
);
