//! # Evaluation Module
//!
//! Built-in static evaluators. Every score is from O's perspective
//! (positive = O advantage, negative = X advantage).
//!
//! - [`PieceCount`]: material balance, `count(O) - count(X)`.
//! - [`Victory`]: sentinel on a win, otherwise 0.
//! - [`Lines`]: open-line heuristic over row and column windows.

use super::evaluator::Evaluator;
use crate::core::{Board, Cell, Player, Score, MAX_SCORE, MIN_SCORE};
use crate::logic::has_won;

/// Weight of an unblocked window holding `n` marks. Grows by 10x per mark.
const LINE_BASE: Score = 10;

pub struct PieceCount;

impl Evaluator for PieceCount {
    fn evaluate(&self, board: &Board) -> Score {
        board.count(Cell::O) as Score - board.count(Cell::X) as Score
    }

    fn name(&self) -> &str {
        "piece-count"
    }
}

/// Only recognizes finished games.
pub struct Victory {
    pub goal: usize,
}

impl Evaluator for Victory {
    fn evaluate(&self, board: &Board) -> Score {
        victory_score(board, self.goal).unwrap_or(0)
    }

    fn name(&self) -> &str {
        "victory"
    }
}

pub struct Lines {
    pub goal: usize,
}

impl Evaluator for Lines {
    fn evaluate(&self, board: &Board) -> Score {
        if let Some(score) = victory_score(board, self.goal) {
            return score;
        }
        if self.goal == 0 {
            return 0;
        }

        let rotated = board.transposed();
        let score = board
            .rows_iter()
            .chain(rotated.rows_iter())
            .map(|line| score_line(line, self.goal))
            .fold(0, Score::saturating_add);
        // 勝利の番兵値とは区別する
        score.clamp(MIN_SCORE + 1, MAX_SCORE - 1)
    }

    fn name(&self) -> &str {
        "lines"
    }
}

fn victory_score(board: &Board, goal: usize) -> Option<Score> {
    if has_won(Player::O, board, goal) {
        Some(MAX_SCORE)
    } else if has_won(Player::X, board, goal) {
        Some(MIN_SCORE)
    } else {
        None
    }
}

/// Sums every `goal`-wide window that only one side has marks in.
fn score_line(line: &[Cell], goal: usize) -> Score {
    if line.len() < goal {
        return 0;
    }
    line.windows(goal)
        .map(|window| {
            let o = window.iter().filter(|&&c| c == Cell::O).count();
            let x = window.iter().filter(|&&c| c == Cell::X).count();
            match (o, x) {
                (0, 0) => 0,
                (n, 0) => window_weight(n),
                (0, n) => -window_weight(n),
                _ => 0, // 両者の駒が混在
            }
        })
        .fold(0, Score::saturating_add)
}

fn window_weight(marks: usize) -> Score {
    let exp = u32::try_from(marks.saturating_sub(1)).unwrap_or(u32::MAX);
    LINE_BASE.saturating_pow(exp)
}
