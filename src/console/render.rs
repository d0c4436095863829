//! Text rendering of a board.

use crate::board::{Board, Cell, BOARD_SIZE};

/// Render the board as rows like `X | O | X`, separated by dashes.
///
/// ```
/// use rust_ttt::board::Board;
/// use rust_ttt::console::render_board;
///
/// let board = Board::from_rows(["XO.", "...", "..X"]).unwrap();
/// assert_eq!(
///     render_board(&board),
///     "X | O |  \n---------\n  |   |  \n---------\n  |   | X"
/// );
/// ```
#[must_use]
pub fn render_board(board: &Board) -> String {
    let separator = "-".repeat(BOARD_SIZE * 4 - 3);

    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".to_string(),
                    Cell::Marked(symbol) => symbol.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{separator}\n"))
}
