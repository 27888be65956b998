pub mod alpha_beta;
pub mod config;
pub mod eval;
pub mod evaluator;
#[cfg(test)]
mod minimax;
pub mod registry;

pub use alpha_beta::{AlphaBeta, AlphaBetaAI, SearchResult};
pub use config::{GameConfig, StrategyConfig};
pub use evaluator::{Evaluator, FnEvaluator};
pub use registry::StrategyRegistry;
