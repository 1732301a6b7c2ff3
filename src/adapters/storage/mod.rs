//! Storage Adapters
//!
//! Implementations of the `GameSessionStore` port.
//!
//! ## Available Adapters
//!
//! - **InMemoryGameSessionStore** - Process-lifetime registry behind one lock
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use adapters::storage::InMemoryGameSessionStore;
//! use ports::GameSessionStore;
//!
//! let store: Arc<dyn GameSessionStore> = Arc::new(InMemoryGameSessionStore::new());
//! ```

mod in_memory_game_store;

pub use in_memory_game_store::InMemoryGameSessionStore;
