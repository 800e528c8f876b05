//! Error types for the valueplay crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the valueplay crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is occupied or out of range")]
    InvalidMove { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' in '{context}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, context: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("policy store at {path} is corrupt: {message}")]
    CorruptStore { path: PathBuf, message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {operation}: {message}")]
    Serialization { operation: String, message: String },

    #[error("progress bar template error: {message}")]
    ProgressTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
