//! The game grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::validate::validate_move;
use crate::core::{Coord, Symbol};
use crate::error::{MoveError, ParseBoardError};

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of lines that can win: every row, every column, both diagonals.
pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// A full row, column or diagonal.
pub type Line = [Coord; BOARD_SIZE];

/// State of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Symbol),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The symbol in this cell, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Marked(symbol) => write!(f, "{symbol}"),
        }
    }
}

/// Every winning line: rows, then columns, then the main and anti
/// diagonal.
pub fn lines() -> impl Iterator<Item = Line> {
    let rows = (0..BOARD_SIZE).map(|r| -> Line { std::array::from_fn(|c| Coord::new(r, c)) });
    let cols = (0..BOARD_SIZE).map(|c| -> Line { std::array::from_fn(|r| Coord::new(r, c)) });
    let diagonal: Line = std::array::from_fn(|i| Coord::new(i, i));
    let anti_diagonal: Line = std::array::from_fn(|i| Coord::new(i, BOARD_SIZE - 1 - i));

    rows.chain(cols)
        .chain(std::iter::once(diagonal))
        .chain(std::iter::once(anti_diagonal))
}

/// A `BOARD_SIZE` x `BOARD_SIZE` grid of cells.
///
/// Cells only ever go from `Empty` to `Marked`; `set` is the single
/// mutating operation and refuses anything else.
///
/// ```
/// use rust_ttt::board::{Board, Cell};
/// use rust_ttt::core::Symbol;
///
/// let mut board = Board::new();
/// board.set(1, 1, Symbol::X).unwrap();
///
/// assert_eq!(board.get(1, 1).unwrap(), Cell::Marked(Symbol::X));
/// assert!(board.set(1, 1, Symbol::O).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from row literals such as `["XO.", ".X.", "..O"]`.
    ///
    /// `X` and `O` are marks; `.`, `_` and space are empty cells.
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, ParseBoardError> {
        let mut board = Self::new();

        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    got: chars.len(),
                });
            }

            for (col, ch) in chars.into_iter().enumerate() {
                board.cells[row][col] = match ch.to_ascii_uppercase() {
                    'X' => Cell::Marked(Symbol::X),
                    'O' => Cell::Marked(Symbol::O),
                    '.' | '_' | ' ' => Cell::Empty,
                    _ => return Err(ParseBoardError::InvalidCell { row, col, ch }),
                };
            }
        }

        Ok(board)
    }

    /// Side length of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        BOARD_SIZE
    }

    #[must_use]
    pub const fn in_range(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Read a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if !Self::in_range(row, col) {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// Write `symbol` into an empty cell.
    pub fn set(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), MoveError> {
        validate_move(self, Coord::new(row, col))?;
        self.cells[row][col] = Cell::Marked(symbol);
        Ok(())
    }

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells().all(|(_, cell)| !cell.is_empty())
    }

    /// True iff some row, column or diagonal is entirely `symbol`.
    #[must_use]
    pub fn has_line(&self, symbol: Symbol) -> bool {
        let mark = Cell::Marked(symbol);
        lines().any(|line| line.iter().all(|&coord| self.at(coord) == mark))
    }

    /// The symbol owning a complete line, if any.
    ///
    /// X is checked first; in a legal game at most one symbol can own a line.
    #[must_use]
    pub fn winner(&self) -> Option<Symbol> {
        Symbol::ALL.into_iter().find(|&symbol| self.has_line(symbol))
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Coord; CELL_COUNT]> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of marked cells.
    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Coord::new(row, col), cell))
        })
    }

    /// Read-only view of the rows.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    // `coord` comes from `lines()`, which never leaves the board.
    fn at(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }
}
