//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! `SessionCommandHandler` sits on top and speaks in chat replies.

pub mod handlers;
mod session_commands;

pub use handlers::{
    CloseGameCommand, CloseGameHandler, CloseGameResult, DescribeGameCommand,
    DescribeGameHandler, DescribeGameResult, JoinGameCommand, JoinGameHandler, JoinGameResult,
    LeaveGameCommand, LeaveGameHandler, LeaveGameResult, ListGamesHandler, ListGamesQuery,
    OpenGameCommand, OpenGameHandler, OpenGameResult,
};
pub use session_commands::{Audience, GameAction, InputLimits, Reply, SessionCommandHandler};
