//! GameSession aggregate entity.
//!
//! A game session is one "game currently being organized": a host opens it
//! under a name, other players join and leave, and the host closes it.
//!
//! # Naming
//!
//! Names keep the casing the host typed for display, but all lookups go
//! through [`fold_name`], so "Chess" and "chess" are the same game.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

use super::errors::GameError;
use super::records::{ClosedGame, GameSummary};

/// Canonical lookup key for a game name: trimmed and lowercased.
pub fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Game session aggregate.
///
/// # Invariants
///
/// - `name` is non-blank and stored trimmed
/// - `owner` is always contained in `members`
/// - `members` holds no duplicates and is never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Display name as typed by the host.
    name: String,

    /// User who opened the game.
    owner: UserId,

    /// Host plus joined players, in join order.
    members: Vec<UserId>,

    /// Free-text instructions for joiners.
    description: Option<String>,

    /// When the game was opened.
    opened_at: Timestamp,
}

impl GameSession {
    /// Open a new game hosted by `owner`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank
    pub fn open(owner: UserId, name: impl Into<String>) -> Result<Self, GameError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(GameError::invalid_input("name", "game name cannot be empty"));
        }

        Ok(Self {
            name: trimmed.to_string(),
            members: vec![owner.clone()],
            owner,
            description: None,
            opened_at: Timestamp::now(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the case-folded lookup key.
    pub fn key(&self) -> String {
        fold_name(&self.name)
    }

    /// Returns the host.
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Returns all players, host first.
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    pub fn player_count(&self) -> usize {
        self.members.len()
    }

    /// Returns the description, if the host has set one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn opened_at(&self) -> &Timestamp {
        &self.opened_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Membership
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user hosts this game.
    pub fn is_owner(&self, user: &UserId) -> bool {
        &self.owner == user
    }

    /// Checks if the given user is the host or a player.
    pub fn is_member(&self, user: &UserId) -> bool {
        self.members.contains(user)
    }

    /// Validates that the user may manage this game.
    ///
    /// # Errors
    ///
    /// - `NotOwner` if the user is not the host
    pub fn authorize(&self, user: &UserId) -> Result<(), GameError> {
        if self.is_owner(user) {
            Ok(())
        } else {
            Err(GameError::not_owner(&self.name))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a player.
    ///
    /// # Errors
    ///
    /// - `AlreadyPlaying` if the user is already in this game
    pub fn add_player(&mut self, user: UserId) -> Result<(), GameError> {
        if self.is_member(&user) {
            return Err(GameError::already_playing(
                &self.name,
                self.is_owner(&user),
            ));
        }
        self.members.push(user);
        Ok(())
    }

    /// Remove a player. The host cannot leave; they close the game instead.
    ///
    /// # Errors
    ///
    /// - `NotAMember` if the user is the host or not in this game
    pub fn remove_player(&mut self, user: &UserId) -> Result<(), GameError> {
        if self.is_owner(user) {
            return Err(GameError::not_a_member(&self.name));
        }
        let position = self
            .members
            .iter()
            .position(|member| member == user)
            .ok_or_else(|| GameError::not_a_member(&self.name))?;
        self.members.remove(position);
        Ok(())
    }

    /// Replace the description. Returns the previous one.
    ///
    /// # Errors
    ///
    /// - `NotOwner` if `by` is not the host
    pub fn update_description(
        &mut self,
        by: &UserId,
        description: impl Into<String>,
    ) -> Result<Option<String>, GameError> {
        self.authorize(by)?;
        Ok(self.description.replace(description.into()))
    }

    /// Read-only listing view.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            name: self.name.clone(),
            owner: self.owner.clone(),
            player_count: self.members.len(),
            has_description: self.description.is_some(),
        }
    }

    /// Consume the game into the record returned to whoever closed it.
    pub fn into_closed(self) -> ClosedGame {
        ClosedGame {
            name: self.name,
            owner: self.owner,
            members: self.members,
        }
    }
}
