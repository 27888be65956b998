use serde::{Deserialize, Serialize};
use std::fmt;

/// 評価値。O が大きいほど有利、X が小さいほど有利
pub type Score = i64;

/// Upper search bound. Evaluations are clamped into `MIN_SCORE..=MAX_SCORE`,
/// which leaves headroom below `i64::MAX` for negation and comparison.
pub const MAX_SCORE: Score = 1 << 62;
pub const MIN_SCORE: Score = -(1 << 62);

/// プレイヤー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    O, // 先手 (maximizing)
    X, // 後手 (minimizing)
}

impl Default for Player {
    fn default() -> Self {
        Player::O
    }
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Player::O
    }

    pub fn mark(self) -> Cell {
        match self {
            Player::O => Cell::O,
            Player::X => Cell::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::O => write!(f, "O"),
            Player::X => write!(f, "X"),
        }
    }
}

/// マスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    O,
    X,
}

impl Cell {
    pub fn display_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::O => 'O',
            Cell::X => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'O' | 'o' => Some(Cell::O),
            'X' | 'x' => Some(Cell::X),
            _ => None,
        }
    }
}

/// 盤面サイズと探索深さの設定 (ゲーム中は不変)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Length of the run required for victory.
    pub goal: usize,
    pub rows: usize,
    pub columns: usize,
    pub max_depth: usize,
    /// Split root children across rayon workers.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            goal: 4,
            rows: 5,
            columns: 5,
            max_depth: 4,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(self, max_depth: usize) -> Self {
        SearchConfig { max_depth, ..self }
    }
}
