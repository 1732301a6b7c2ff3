//! Game Lobby - Community game sessions for chat servers
//!
//! This crate implements the `game` chat command: members open a named
//! game, others join or leave it, and the host describes or closes it.
//! A single in-memory registry keeps every user in at most one game.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
