//! Console collaborators for the engine.
//!
//! The engine does no I/O; this module supplies the pieces a terminal
//! front end needs:
//! - `render_board`: text grid for a read-only board
//! - `ConsoleInput` / `StdioInput`: `MoveInput` over lines of text
//! - `ConsoleObserver`: `GameObserver` that prints each position

pub mod input;
pub mod observer;
pub mod render;

pub use input::{ConsoleInput, StdioInput};
pub use observer::ConsoleObserver;
pub use render::render_board;
