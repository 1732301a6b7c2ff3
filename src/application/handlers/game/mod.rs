//! Game command and query handlers.
//!
//! Each handler performs one registry operation, publishes the matching
//! domain event, and returns the store's result to the caller.

mod close_game;
mod describe_game;
mod join_game;
mod leave_game;
mod list_games;
mod open_game;
mod publish;

#[cfg(test)]
mod test_support;

pub use close_game::{CloseGameCommand, CloseGameHandler, CloseGameResult};
pub use describe_game::{DescribeGameCommand, DescribeGameHandler, DescribeGameResult};
pub use join_game::{JoinGameCommand, JoinGameHandler, JoinGameResult};
pub use leave_game::{LeaveGameCommand, LeaveGameHandler, LeaveGameResult};
pub use list_games::{ListGamesHandler, ListGamesQuery};
pub use open_game::{OpenGameCommand, OpenGameHandler, OpenGameResult};
