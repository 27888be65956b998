use super::error::IllegalMoveError;
use super::types::{Cell, Player, SearchConfig};
use serde::{Deserialize, Serialize};

/// 盤面
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    columns: usize,
    /// row-major, `index = row * columns + col`
    cells: Vec<Cell>,
}

/// Unchecked serde form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = String;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = raw.rows.checked_mul(raw.columns);
        if expected != Some(raw.cells.len()) {
            return Err(format!(
                "board of {}x{} needs {} cells, got {}",
                raw.rows,
                raw.columns,
                raw.rows.saturating_mul(raw.columns),
                raw.cells.len()
            ));
        }
        Ok(Board {
            rows: raw.rows,
            columns: raw.columns,
            cells: raw.cells,
        })
    }
}

impl Board {
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Empty board sized by `config`.
    pub fn empty(config: &SearchConfig) -> Self {
        Self::new(config.rows, config.columns)
    }

    /// Builds a board from one string per row using `.`, `O` and `X`.
    /// Returns `None` on ragged rows or unknown characters.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let columns = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for row in rows {
            if row.chars().count() != columns {
                return None;
            }
            for c in row.chars() {
                cells.push(Cell::from_char(c)?);
            }
        }
        Some(Board {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.cell(row * self.columns + col)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// 指定マスに駒を置く (driver 用、その場で変更)
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), IllegalMoveError> {
        let cells = self.cells.len();
        match self.cells.get_mut(index) {
            None => Err(IllegalMoveError::OutOfRange { index, cells }),
            Some(cell) if *cell == Cell::Empty => {
                *cell = player.mark();
                Ok(())
            }
            Some(_) => Err(IllegalMoveError::Occupied { index }),
        }
    }

    /// Iterates the rows as slices.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics, so a zero-width board yields nothing
        self.cells.chunks(self.columns.max(1)).take(self.rows)
    }

    /// Transposed copy: column `c` of `self` becomes row `c` of the result.
    pub fn transposed(&self) -> Board {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.columns {
            for row in 0..self.rows {
                cells.push(self.cells[row * self.columns + col]);
            }
        }
        Board {
            rows: self.columns,
            columns: self.rows,
            cells,
        }
    }
}
