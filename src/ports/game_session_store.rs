//! Game session store port.
//!
//! Defines the contract for the registry of open games. It is the only
//! stateful piece of the bot, and it owns every membership invariant:
//!
//! - a user hosts or plays in at most one game at a time
//! - the host is always one of the game's players
//! - game names are unique under case-insensitive comparison
//!
//! # Design
//!
//! - **Synchronous**: no operation touches I/O, so nothing here awaits
//! - **Atomic**: every operation is linearizable against every other
//! - **Case-insensitive lookups**: names are matched via
//!   [`fold_name`](crate::domain::game::fold_name) but displayed as typed

use crate::domain::foundation::UserId;
use crate::domain::game::{
    ClosedGame, DescribedGame, GameError, GameSession, GameSummary, JoinedGame, LeftGame,
};

/// Registry of open game sessions.
///
/// When two calls conflict (e.g., two users opening "Chess" at once), exactly
/// one wins and the other receives `NameInUse` or `AlreadyPlaying`.
pub trait GameSessionStore: Send + Sync {
    /// Open a game hosted by `owner`.
    ///
    /// # Errors
    ///
    /// - `AlreadyPlaying` if the owner already hosts or plays in a game
    /// - `NameInUse` if an open game has the same case-folded name
    /// - `InvalidInput` if the name is blank
    fn open(&self, owner: &UserId, name: &str) -> Result<GameSession, GameError>;

    /// Join the game called `name`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no game matches
    /// - `AlreadyPlaying` if the user is in any game, the target included
    fn join(&self, user: &UserId, name: &str) -> Result<JoinedGame, GameError>;

    /// Leave the game called `name`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no game matches
    /// - `NotAMember` if the user hosts it or is not playing in it
    fn leave(&self, user: &UserId, name: &str) -> Result<LeftGame, GameError>;

    /// Replace the description of the game called `name`, returning the
    /// description it replaced.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no game matches
    /// - `NotOwner` if `owner` does not host it
    fn set_description(
        &self,
        owner: &UserId,
        name: &str,
        text: &str,
    ) -> Result<DescribedGame, GameError>;

    /// Close the game called `name`, evicting every player.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no game matches
    /// - `NotOwner` if `owner` does not host it
    fn close(&self, owner: &UserId, name: &str) -> Result<ClosedGame, GameError>;

    /// Snapshot of all open games, oldest first.
    fn list_all(&self) -> Vec<GameSummary>;

    /// Games whose name starts with `prefix`, case-insensitively, oldest first.
    fn find_by_prefix(&self, prefix: &str) -> Vec<GameSession>;

    /// Exact case-insensitive lookup.
    fn find(&self, name: &str) -> Option<GameSession>;

    /// The game the user currently hosts or plays in.
    fn find_by_member(&self, user: &UserId) -> Option<GameSession>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn GameSessionStore) {}
    }
}
