//! Referee state machine and game outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, Symbol};

/// Result of a game, as seen from outside the referee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    /// A symbol completed a line.
    Win(Symbol),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Win and Draw are permanent.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Symbol> {
        match self {
            Outcome::Win(symbol) => Some(symbol),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Win(symbol) => write!(f, "{symbol} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Where the referee is in the turn cycle.
///
/// `AwaitingMove(Seat::FIRST)` is the initial state; `Won` and `Draw` are
/// terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefereeState {
    AwaitingMove(Seat),
    Won(Symbol),
    Draw,
}

impl Default for RefereeState {
    fn default() -> Self {
        RefereeState::AwaitingMove(Seat::FIRST)
    }
}

impl RefereeState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, RefereeState::AwaitingMove(_))
    }

    /// The seat on turn, if the game is still running.
    #[must_use]
    pub const fn to_move(self) -> Option<Seat> {
        match self {
            RefereeState::AwaitingMove(seat) => Some(seat),
            RefereeState::Won(_) | RefereeState::Draw => None,
        }
    }

    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            RefereeState::AwaitingMove(_) => Outcome::InProgress,
            RefereeState::Won(symbol) => Outcome::Win(symbol),
            RefereeState::Draw => Outcome::Draw,
        }
    }
}
