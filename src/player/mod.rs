pub mod ai;
pub mod controller;

pub use ai::AlphaBetaAI;
pub use controller::PlayerController;
