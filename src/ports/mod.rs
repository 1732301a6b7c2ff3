//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `GameSessionStore` - Registry of open games and their players
//! - `EventPublisher` - Port for publishing domain events

mod event_publisher;
mod game_session_store;

pub use event_publisher::{EventPublisher, PublishError};
pub use game_session_store::GameSessionStore;
