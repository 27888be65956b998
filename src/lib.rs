//! Generalized noughts and crosses (5x5, four in a row by default) played
//! between two pluggable strategies.
//!
//! - [`core`]: board, players, moves, errors and [`core::SearchConfig`]
//! - [`logic`]: legal moves and win detection (rows and columns only)
//! - [`player`]: controllers, evaluators and the alpha-beta search
//! - [`game`]: the turn loop
//! - [`display`]: textual board rendering

pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;

pub use crate::core::{Board, Cell, Move, Player, Score, SearchConfig, MAX_SCORE, MIN_SCORE};
pub use crate::game::{Game, GameState, Outcome};
pub use crate::player::ai::{AlphaBeta, AlphaBetaAI, Evaluator, GameConfig, StrategyRegistry};
pub use crate::player::PlayerController;
