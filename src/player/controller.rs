use crate::core::{Board, Move, Player};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// Returns `Move::NoMove` only when the board has no empty cell.
    fn choose_move(&self, board: &Board) -> Move;
    fn name(&self) -> &str;
    fn player(&self) -> Player;
}
