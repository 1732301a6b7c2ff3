//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a too-long validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::TooLong { field, .. } => field,
        }
    }
}

/// Stable, machine-readable error codes used in logs and event metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Membership errors
    AlreadyPlaying,
    NotAMember,
    NotPlaying,

    // Lookup errors
    GameNotFound,
    GameNameInUse,
    AmbiguousGameName,

    // Authorization errors
    NotOwner,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::AlreadyPlaying => "ALREADY_PLAYING",
            ErrorCode::NotAMember => "NOT_A_MEMBER",
            ErrorCode::NotPlaying => "NOT_PLAYING",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::GameNameInUse => "GAME_NAME_IN_USE",
            ErrorCode::AmbiguousGameName => "AMBIGUOUS_GAME_NAME",
            ErrorCode::NotOwner => "NOT_OWNER",
        };
        write!(f, "{}", s)
    }
}
