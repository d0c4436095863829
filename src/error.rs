//! Error types for the engine.
//!
//! Errors are split by who can act on them:
//! - `MoveError`: a coordinate the board refuses (structural)
//! - `InputError`: a human entry rejected and retried inside the agent
//! - `AgentError`: an agent that could not produce a move at all
//! - `EngineError`: anything that halts a game in progress

use std::io;

use thiserror::Error;

use crate::board::BOARD_SIZE;
use crate::core::{Coord, Seat, Symbol};
use crate::referee::Outcome;

/// A coordinate the board will not accept.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("({row}, {col}) is off the board (rows and columns run 0-{max})", max = BOARD_SIZE - 1)]
    OutOfRange { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already taken")]
    CellOccupied { row: usize, col: usize },
}

impl MoveError {
    /// The coordinate that was refused.
    #[must_use]
    pub fn coord(&self) -> Coord {
        match *self {
            MoveError::OutOfRange { row, col } | MoveError::CellOccupied { row, col } => {
                Coord::new(row, col)
            }
        }
    }
}

/// Why a line of human input was turned down.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("'{input}' is not a move; enter two numbers like 1,2")]
    Malformed { input: String },

    #[error(transparent)]
    Illegal(#[from] MoveError),
}

/// An agent that failed to produce any move.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AgentError {
    #[error("no empty cell left to play")]
    NoLegalMove,

    #[error("gave up after {attempts} rejected moves")]
    RetriesExhausted { attempts: u32 },

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("failed to read move: {0}")]
    Io(#[from] io::Error),
}

/// Errors that stop the referee.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    #[error("game is already over ({outcome})")]
    GameOver { outcome: Outcome },

    #[error("game was halted by an earlier error")]
    Halted,

    #[error("{seat} ({symbol}) could not move: {source}")]
    Agent {
        seat: Seat,
        symbol: Symbol,
        #[source]
        source: AgentError,
    },

    #[error("engine fault: {seat} ({symbol}) proposed illegal move {coord}: {source}")]
    Fault {
        seat: Seat,
        symbol: Symbol,
        coord: Coord,
        #[source]
        source: MoveError,
    },

    #[error("observer failed: {0}")]
    Observer(#[from] io::Error),
}

/// A board literal that does not describe a valid grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("row {row} has {got} cells, expected {expected}", expected = BOARD_SIZE)]
    RowLength { row: usize, got: usize },

    #[error("invalid cell '{ch}' at ({row}, {col}); use X, O or .")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Configuration values that cannot be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown agent kind '{0}' (expected 'human' or 'random')")]
    UnknownAgentKind(String),
}

/// Convenience alias for referee results.
pub type Result<T> = std::result::Result<T, EngineError>;
