//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and event
//! infrastructure that form the vocabulary of the game lobby domain.

mod command;
mod errors;
mod events;
mod ids;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{ErrorCode, ValidationError};
pub(crate) use events::domain_event;
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata};
pub use ids::UserId;
pub use timestamp::Timestamp;
