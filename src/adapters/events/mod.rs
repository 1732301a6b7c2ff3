//! Event bus adapters.
//!
//! - `InMemoryEventBus` - in-process publisher with history and live fan-out

mod in_memory;

pub use in_memory::{InMemoryEventBus, DEFAULT_HISTORY_LIMIT};
