//! Referee: the turn loop and its state machine.
//!
//! States are `AwaitingMove(seat)`, `Won(symbol)` and `Draw`. From
//! `AwaitingMove(i)` the referee asks seat `i` for a move, writes it, then
//! moves to `Won` if the mover completed a line, else `Draw` if the board
//! is full, else `AwaitingMove(i + 1 mod 2)`.

pub mod game;
pub mod observer;
pub mod state;

pub use game::Referee;
pub use observer::GameObserver;
pub use state::{Outcome, RefereeState};
