use crate::core::{Board, Cell, IllegalMoveError, Move, Player};

/// 合法手生成。空きマスを昇順に列挙する
///
/// The ascending order is what makes tie-breaking in the search reproducible.
pub fn legal_moves(board: &Board) -> impl Iterator<Item = Move> + '_ {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, &cell)| cell == Cell::Empty)
        .map(|(index, _)| Move::Place(index))
}

/// Returns a copy of `board` with `mv` played by `player`.
pub fn apply_move(board: &Board, mv: Move, player: Player) -> Result<Board, IllegalMoveError> {
    let index = mv.index().ok_or(IllegalMoveError::NoMove)?;
    let mut next = board.clone();
    next.place(index, player)?;
    Ok(next)
}

/// 勝利判定 (行と列のみ。斜めは判定しない)
///
/// True iff some row or column holds `goal` consecutive marks of `player`.
/// A `goal` longer than both dimensions can never be reached, and a zero
/// `goal` never counts as a win.
pub fn has_won(player: Player, board: &Board, goal: usize) -> bool {
    if goal == 0 {
        return false;
    }
    let mark = player.mark();

    if goal <= board.columns() && board.rows_iter().any(|row| has_run(row, mark, goal)) {
        return true;
    }

    if goal <= board.rows() {
        let rotated = board.transposed();
        if rotated.rows_iter().any(|col| has_run(col, mark, goal)) {
            return true;
        }
    }

    false
}

fn has_run(line: &[Cell], mark: Cell, goal: usize) -> bool {
    let mut run = 0;
    for &cell in line {
        if cell == mark {
            run += 1;
            if run >= goal {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// O is checked first; a board where both players have a run reports O.
pub fn winner(board: &Board, goal: usize) -> Option<Player> {
    [Player::O, Player::X]
        .into_iter()
        .find(|&p| has_won(p, board, goal))
}

/// 探索の打ち切り条件 (勝敗決定または盤面が埋まった)
pub fn is_terminal(board: &Board, goal: usize) -> bool {
    board.is_full() || winner(board, goal).is_some()
}
