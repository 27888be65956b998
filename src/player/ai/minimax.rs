//! Unpruned minimax, kept as a reference for checking the alpha-beta search.

use super::alpha_beta::static_eval;
use super::evaluator::Evaluator;
use crate::core::{Board, Player, Score, SearchConfig, MAX_SCORE, MIN_SCORE};
use crate::logic::{apply_move, is_terminal, legal_moves};

/// Returns the minimax value of `board` and the number of nodes visited.
pub(crate) fn minimax(
    config: &SearchConfig,
    evaluator: &dyn Evaluator,
    board: &Board,
    player: Player,
    depth: usize,
) -> (Score, u64) {
    if depth == 0 || is_terminal(board, config.goal) {
        return (static_eval(evaluator, board), 1);
    }

    let mut nodes = 1;
    let mut value = if player.is_maximizing() {
        MIN_SCORE
    } else {
        MAX_SCORE
    };

    for mv in legal_moves(board) {
        let next_board = apply_move(board, mv, player).unwrap();
        let (eval, n) = minimax(config, evaluator, &next_board, player.opponent(), depth - 1);
        nodes += n;
        value = if player.is_maximizing() {
            value.max(eval)
        } else {
            value.min(eval)
        };
    }

    (value, nodes)
}
