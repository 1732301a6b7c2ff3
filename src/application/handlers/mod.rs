//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod game;

pub use game::{
    // Commands
    CloseGameCommand, CloseGameHandler, CloseGameResult,
    DescribeGameCommand, DescribeGameHandler, DescribeGameResult,
    JoinGameCommand, JoinGameHandler, JoinGameResult,
    LeaveGameCommand, LeaveGameHandler, LeaveGameResult,
    OpenGameCommand, OpenGameHandler, OpenGameResult,
    // Queries
    ListGamesHandler, ListGamesQuery,
};
