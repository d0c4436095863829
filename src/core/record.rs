//! Move history.
//!
//! Every move the referee applies is kept as a `MoveRecord`. The history
//! is in-memory only; it is serde-serializable so callers can emit it.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::{Seat, Symbol};

/// An applied move with metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number within the game.
    pub ply: u32,

    /// The seat that moved.
    pub seat: Seat,

    /// The symbol written.
    pub symbol: Symbol,

    /// Where it was written.
    pub coord: Coord,
}

impl MoveRecord {
    #[must_use]
    pub fn new(ply: u32, seat: Seat, symbol: Symbol, coord: Coord) -> Self {
        Self {
            ply,
            seat,
            symbol,
            coord,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} {}", self.ply, self.symbol, self.coord)
    }
}
