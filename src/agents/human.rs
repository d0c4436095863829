//! Human agent and its input collaborator.
//!
//! The agent never talks to a terminal itself. It asks a `MoveInput` for a
//! raw line, parses and validates it, and on failure hands the reason back
//! to the input before asking again. The loop ends only on a legal move,
//! on end of input, or when an optional retry cap is reached.

use std::collections::VecDeque;
use std::io;

use tracing::{debug, warn};

use super::Agent;
use crate::board::{validate_move, Board};
use crate::core::{AgentKind, Coord, Symbol};
use crate::error::{AgentError, InputError};

/// Source of raw human move entries.
pub trait MoveInput {
    /// Ask for a move. Returns `Ok(None)` once input is exhausted.
    fn request_move(&mut self, board: &Board, symbol: Symbol) -> io::Result<Option<String>>;

    /// Report why the last entry was rejected.
    fn reject(&mut self, _error: &InputError) -> io::Result<()> {
        Ok(())
    }
}

impl<T: MoveInput + ?Sized> MoveInput for Box<T> {
    fn request_move(&mut self, board: &Board, symbol: Symbol) -> io::Result<Option<String>> {
        (**self).request_move(board, symbol)
    }

    fn reject(&mut self, error: &InputError) -> io::Result<()> {
        (**self).reject(error)
    }
}

/// Parse `row,col` or `row col` into a coordinate.
///
/// Only the shape is checked here; range and occupancy are the board's call.
pub fn parse_move(line: &str) -> Result<Coord, InputError> {
    let malformed = || InputError::Malformed {
        input: line.trim().to_string(),
    };

    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let row = row.parse::<usize>().map_err(|_| malformed())?;
    let col = col.parse::<usize>().map_err(|_| malformed())?;
    Ok(Coord::new(row, col))
}

/// Agent driven by a person.
///
/// ```
/// use rust_ttt::agents::{Agent, HumanAgent, ScriptedInput};
/// use rust_ttt::board::Board;
/// use rust_ttt::core::{Coord, Symbol};
///
/// let mut human = HumanAgent::new(ScriptedInput::new(["5,5", "1,1"]));
/// let coord = human.propose_move(&Board::new(), Symbol::X).unwrap();
///
/// assert_eq!(coord, Coord::new(1, 1));
/// assert_eq!(human.input().rejections().len(), 1);
/// ```
#[derive(Debug)]
pub struct HumanAgent<I> {
    input: I,
    max_retries: Option<u32>,
}

impl<I: MoveInput> HumanAgent<I> {
    /// Create an agent that re-prompts until it gets a legal move.
    pub fn new(input: I) -> Self {
        Self {
            input,
            max_retries: None,
        }
    }

    /// Give up with `RetriesExhausted` once more than `max` entries in a
    /// row have been rejected. `None` never gives up.
    #[must_use]
    pub fn with_max_retries(mut self, max: Option<u32>) -> Self {
        self.max_retries = max;
        self
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_input(self) -> I {
        self.input
    }
}

impl<I: MoveInput + Send> Agent for HumanAgent<I> {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }

    fn propose_move(&mut self, board: &Board, symbol: Symbol) -> Result<Coord, AgentError> {
        let mut rejected = 0u32;

        loop {
            let Some(line) = self.input.request_move(board, symbol)? else {
                return Err(AgentError::InputClosed);
            };

            let attempt = parse_move(&line).and_then(|coord| {
                validate_move(board, coord)?;
                Ok(coord)
            });

            match attempt {
                Ok(coord) => {
                    debug!(%symbol, %coord, rejected, "human move accepted");
                    return Ok(coord);
                }
                Err(error) => {
                    warn!(%symbol, input = line.trim(), %error, "human move rejected");
                    self.input.reject(&error)?;
                    rejected += 1;

                    if self.max_retries.is_some_and(|max| rejected > max) {
                        return Err(AgentError::RetriesExhausted { attempts: rejected });
                    }
                }
            }
        }
    }
}

/// A fixed sequence of entries, e.g. for tests or replaying a session.
///
/// Rejections reported by the agent are kept for inspection.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    rejections: Vec<InputError>,
}

impl ScriptedInput {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            rejections: Vec::new(),
        }
    }

    /// Rejections received so far, oldest first.
    #[must_use]
    pub fn rejections(&self) -> &[InputError] {
        &self.rejections
    }

    /// Entries not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl MoveInput for ScriptedInput {
    fn request_move(&mut self, _board: &Board, _symbol: Symbol) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn reject(&mut self, error: &InputError) -> io::Result<()> {
        self.rejections.push(error.clone());
        Ok(())
    }
}
