use std::path::PathBuf;

use super::types::Player;

/// Errors raised when a move cannot be applied to a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMoveError {
    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("cell {index} is outside a board of {cells} cells")]
    OutOfRange { index: usize, cells: usize },

    #[error("no move to apply")]
    NoMove,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("unknown evaluator: {0}")]
    UnknownEvaluator(String),
}

/// Errors raised by the game driver when a controller misbehaves.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{player} chose an illegal move: {source}")]
    IllegalMove {
        player: Player,
        source: IllegalMoveError,
    },

    #[error("{player} passed with {empty} empty cells left")]
    Passed { player: Player, empty: usize },
}
