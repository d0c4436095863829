//! Uniform random agent.

use tracing::debug;

use super::Agent;
use crate::board::Board;
use crate::core::{AgentKind, Coord, GameRng, Symbol};
use crate::error::AgentError;

/// Picks uniformly among the empty cells.
///
/// Holds nothing but its random stream, so two agents built from the same
/// seed play identical games against identical opponents.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }

    fn propose_move(&mut self, board: &Board, symbol: Symbol) -> Result<Coord, AgentError> {
        let empty = board.empty_cells();
        let coord = *self.rng.choose(&empty).ok_or(AgentError::NoLegalMove)?;
        debug!(%symbol, %coord, choices = empty.len(), "random agent picked a cell");
        Ok(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_empty_cell() {
        let board = Board::from_rows(["XO.", "O.X", ".XO"]).unwrap();
        let mut agent = RandomAgent::new(1);

        for _ in 0..50 {
            let coord = agent.propose_move(&board, Symbol::X).unwrap();
            assert!(board.get(coord.row, coord.col).unwrap().is_empty());
        }
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let board = Board::from_rows(["XOX", "OXO", "OX."]).unwrap();
        let mut agent = RandomAgent::new(99);

        for _ in 0..20 {
            assert_eq!(agent.propose_move(&board, Symbol::O).unwrap(), Coord::new(2, 2));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_rows(["XOX", "XOO", "OXX"]).unwrap();
        let mut agent = RandomAgent::new(0);

        assert!(matches!(
            agent.propose_move(&board, Symbol::X),
            Err(AgentError::NoLegalMove)
        ));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomAgent::new(5);
        let mut b = RandomAgent::new(5);

        for _ in 0..10 {
            assert_eq!(
                a.propose_move(&board, Symbol::X).unwrap(),
                b.propose_move(&board, Symbol::X).unwrap()
            );
        }
    }

    #[test]
    fn test_distribution_reaches_every_cell() {
        let board = Board::new();
        let mut agent = RandomAgent::new(2024);
        let mut hits = [[0u32; 3]; 3];

        for _ in 0..900 {
            let coord = agent.propose_move(&board, Symbol::X).unwrap();
            hits[coord.row][coord.col] += 1;
        }

        // 100 expected per cell; a uniform draw stays well inside this band.
        for row in hits {
            for count in row {
                assert!((40..=160).contains(&count), "skewed count {count}");
            }
        }
    }
}
