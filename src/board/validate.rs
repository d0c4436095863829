//! Move legality.
//!
//! One predicate decides whether a coordinate may be played: it must be on
//! the board and the cell must be empty. `Board::set` and the human agent's
//! retry loop both go through `validate_move`, so a move the agent accepts
//! is always a move the board accepts.

use super::grid::{Board, Cell};
use crate::core::Coord;
use crate::error::MoveError;

/// Check that `coord` is on the board and empty.
pub fn validate_move(board: &Board, coord: Coord) -> Result<(), MoveError> {
    match board.get(coord.row, coord.col)? {
        Cell::Empty => Ok(()),
        Cell::Marked(_) => Err(MoveError::CellOccupied {
            row: coord.row,
            col: coord.col,
        }),
    }
}

#[must_use]
pub fn is_legal(board: &Board, coord: Coord) -> bool {
    validate_move(board, coord).is_ok()
}
