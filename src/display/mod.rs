use crate::core::{Board, Cell};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// 盤面を文字列化する (`.` / `O` / `X`、1 行につき 1 列分)
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(board.len() + board.rows());
    for row in board.rows_iter() {
        out.extend(row.iter().map(|c| c.display_char()));
        out.push('\n');
    }
    out
}

/// Prints the board followed by a blank line. With `color`, O is cyan and X
/// is magenta like the rest of the terminal output.
pub fn print_board(board: &Board, color: bool) -> io::Result<()> {
    let mut out = io::stdout().lock();

    if !color {
        write!(out, "{}", render_board(board))?;
        writeln!(out)?;
        return out.flush();
    }

    for row in board.rows_iter() {
        for &cell in row {
            let text = cell.display_char().to_string();
            match cell {
                Cell::O => write!(out, "{}", text.cyan().bold())?,
                Cell::X => write!(out, "{}", text.magenta().bold())?,
                Cell::Empty => write!(out, "{}", text.dark_grey())?,
            }
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    out.flush()
}
