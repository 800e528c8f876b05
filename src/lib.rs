//! Self-play temporal-difference learning for Tic-Tac-Toe
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe board with last-move outcome resolution
//! - Tabular state-value policies learned through self-play TD updates
//! - Training and evaluation pipelines with composable observers
//! - MessagePack persistence behind a pluggable store port
//! - A session boundary for interactive frontends

pub mod adapters;
pub mod cli;
pub mod error;
pub mod learning;
pub mod pipeline;
pub mod ports;
pub mod session;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use learning::PolicyTable;
pub use session::MatchSession;
pub use tictactoe::{Board, Cell, Outcome, Player};
pub use types::StateKey;
