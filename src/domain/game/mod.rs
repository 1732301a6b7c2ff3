//! Game domain module.
//!
//! Handles the lifecycle of community game sessions: opening, joining,
//! leaving, describing and closing.
//!
//! # Events
//!
//! - `GameOpened` - Published when a host opens a game
//! - `PlayerJoined` - Published when a player joins
//! - `PlayerLeft` - Published when a player leaves
//! - `GameDescriptionUpdated` - Published when the host sets a description
//! - `GameClosed` - Published when the host closes the game

mod errors;
mod events;
mod records;
mod session;

pub use errors::GameError;
pub use events::{GameClosed, GameDescriptionUpdated, GameOpened, PlayerJoined, PlayerLeft};
pub use records::{ClosedGame, DescribedGame, GameSummary, JoinedGame, LeftGame};
pub use session::{fold_name, GameSession};
