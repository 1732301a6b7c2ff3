//! Game-session error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Expected, recoverable failures of game-session operations.
///
/// None of these is fatal: every variant is reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The user already hosts or plays in a game.
    #[error("user is already in game '{game}' (hosting: {hosting})")]
    AlreadyPlaying { game: String, hosting: bool },

    /// Another game with the same case-folded name is open.
    #[error("a game named '{name}' is already open")]
    NameInUse { name: String },

    /// No open game matches the name.
    #[error("game '{name}' not found")]
    NotFound { name: String },

    /// The user is the host or was never a player, so cannot leave.
    #[error("user is not a player of game '{name}'")]
    NotAMember { name: String },

    /// Only the host may perform the action.
    #[error("user is not the host of game '{name}'")]
    NotOwner { name: String },

    /// Malformed command payload.
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// No game was named and the user is not in any game.
    #[error("user is not in any game")]
    NotPlaying,

    /// A partial name matched more than one open game.
    #[error("'{query}' matches several games: {}", .candidates.join(", "))]
    AmbiguousName {
        query: String,
        candidates: Vec<String>,
    },
}

impl GameError {
    pub fn already_playing(game: impl Into<String>, hosting: bool) -> Self {
        GameError::AlreadyPlaying {
            game: game.into(),
            hosting,
        }
    }
    pub fn name_in_use(name: impl Into<String>) -> Self {
        GameError::NameInUse { name: name.into() }
    }
    pub fn not_found(name: impl Into<String>) -> Self {
        GameError::NotFound { name: name.into() }
    }
    pub fn not_a_member(name: impl Into<String>) -> Self {
        GameError::NotAMember { name: name.into() }
    }
    pub fn not_owner(name: impl Into<String>) -> Self {
        GameError::NotOwner { name: name.into() }
    }
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        GameError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::AlreadyPlaying { .. } => ErrorCode::AlreadyPlaying,
            GameError::NameInUse { .. } => ErrorCode::GameNameInUse,
            GameError::NotFound { .. } => ErrorCode::GameNotFound,
            GameError::NotAMember { .. } => ErrorCode::NotAMember,
            GameError::NotOwner { .. } => ErrorCode::NotOwner,
            GameError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            GameError::NotPlaying => ErrorCode::NotPlaying,
            GameError::AmbiguousName { .. } => ErrorCode::AmbiguousGameName,
        }
    }
}

impl From<ValidationError> for GameError {
    fn from(err: ValidationError) -> Self {
        GameError::InvalidInput {
            field: err.field().to_string(),
            reason: err.to_string(),
        }
    }
}
