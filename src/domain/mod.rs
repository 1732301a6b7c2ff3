//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `game` - Game session aggregate, its errors and events

pub mod foundation;
pub mod game;
