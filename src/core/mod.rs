pub mod board;
pub mod error;
pub mod r#move;
pub mod types;

pub use board::Board;
pub use error::{ConfigError, GameError, IllegalMoveError};
pub use r#move::Move;
pub use types::{Cell, Player, Score, SearchConfig, MAX_SCORE, MIN_SCORE};
