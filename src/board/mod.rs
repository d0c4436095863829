//! The board: a fixed grid of cells, checked access, and line evaluation.
//!
//! Only the referee holds a `&mut Board`; agents and renderers see `&Board`.

pub mod grid;
pub mod validate;

pub use grid::{lines, Board, Cell, Line, BOARD_SIZE, CELL_COUNT, LINE_COUNT};
pub use validate::{is_legal, validate_move};
