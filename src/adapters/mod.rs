//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `console` - Line-oriented chat transport over stdin/stdout
//! - `events` - In-memory event bus
//! - `storage` - In-memory game session registry

pub mod console;
pub mod events;
pub mod storage;

pub use console::{format_reply, parse_line, ConsoleCommand};
pub use events::InMemoryEventBus;
pub use storage::InMemoryGameSessionStore;
