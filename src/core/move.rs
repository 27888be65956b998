use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Index into the board (`row * columns + col`).
    Place(usize),
    /// 合法手なし (盤面が埋まっている、または探索しなかった)
    NoMove,
}

impl Move {
    pub fn index(self) -> Option<usize> {
        match self {
            Move::Place(index) => Some(index),
            Move::NoMove => None,
        }
    }

    pub fn is_none(self) -> bool {
        self == Move::NoMove
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Place(index) => write!(f, "place at {}", index),
            Move::NoMove => write!(f, "no move"),
        }
    }
}
