//! Result records handed back by the session store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

use super::session::GameSession;

/// Listing view of an open game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub name: String,
    pub owner: UserId,
    pub player_count: usize,
    pub has_description: bool,
}

/// Outcome of a successful description update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedGame {
    /// The game with its new description.
    pub game: GameSession,
    /// The description it replaced, if any.
    pub previous: Option<String>,
}

/// Outcome of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedGame {
    pub name: String,
    pub owner: UserId,
    /// The host's description at join time; empty when none is set.
    pub description: String,
}

/// Outcome of a successful leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeftGame {
    pub name: String,
    pub owner: UserId,
    pub remaining: usize,
}

/// A game as it was at the moment it was closed.
///
/// `members` includes the host. Notifying the evicted players is up to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedGame {
    pub name: String,
    pub owner: UserId,
    pub members: Vec<UserId>,
}

impl ClosedGame {
    /// Everyone except the host.
    pub fn players(&self) -> Vec<UserId> {
        self.members
            .iter()
            .filter(|member| **member != self.owner)
            .cloned()
            .collect()
    }
}
