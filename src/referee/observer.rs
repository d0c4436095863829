//! Hooks for whoever displays the game.
//!
//! The referee calls a `GameObserver` at fixed points; every hook gets a
//! read-only board. All hooks default to doing nothing, and `()` is the
//! silent observer.

use std::io;

use super::state::Outcome;
use crate::board::Board;
use crate::core::{AgentKind, MoveRecord, Seat, Symbol};

pub trait GameObserver {
    /// Before the first move.
    fn on_start(&mut self, _board: &Board) -> io::Result<()> {
        Ok(())
    }

    /// Before a seat is asked for its move.
    fn on_turn(&mut self, _seat: Seat, _symbol: Symbol, _kind: AgentKind) -> io::Result<()> {
        Ok(())
    }

    /// After every successful move.
    fn on_move(&mut self, _record: &MoveRecord, _board: &Board) -> io::Result<()> {
        Ok(())
    }

    /// Once, when the game reaches a terminal outcome.
    fn on_finish(&mut self, _outcome: Outcome, _board: &Board) -> io::Result<()> {
        Ok(())
    }
}

impl GameObserver for () {}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn on_start(&mut self, board: &Board) -> io::Result<()> {
        (**self).on_start(board)
    }

    fn on_turn(&mut self, seat: Seat, symbol: Symbol, kind: AgentKind) -> io::Result<()> {
        (**self).on_turn(seat, symbol, kind)
    }

    fn on_move(&mut self, record: &MoveRecord, board: &Board) -> io::Result<()> {
        (**self).on_move(record, board)
    }

    fn on_finish(&mut self, outcome: Outcome, board: &Board) -> io::Result<()> {
        (**self).on_finish(outcome, board)
    }
}
