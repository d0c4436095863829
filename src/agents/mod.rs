//! Move-producing agents.
//!
//! An `Agent` is asked for a move with a read-only board and its own
//! symbol. Agents never hold the board, so the referee stays its only
//! writer.
//!
//! - `HumanAgent`: reads entries from a `MoveInput`, retries on bad input
//! - `RandomAgent`: uniform choice among empty cells
//!
//! Stronger strategies plug in by implementing `Agent`; the referee does
//! not change.

pub mod human;
pub mod random;

pub use human::{parse_move, HumanAgent, MoveInput, ScriptedInput};
pub use random::RandomAgent;

use crate::board::Board;
use crate::core::{AgentKind, Coord, GameConfig, GameRng, Seat, SeatMap, Symbol};
use crate::error::AgentError;

/// Capability: produce a move for a board.
pub trait Agent: Send {
    /// Which variant this is. Used for announcements and logs.
    fn kind(&self) -> AgentKind;

    /// Propose a move for `symbol` on `board`.
    ///
    /// A returned coordinate must name a cell that is empty on `board`.
    /// The referee treats anything else as a fault.
    fn propose_move(&mut self, board: &Board, symbol: Symbol) -> Result<Coord, AgentError>;
}

/// Build both seats' agents from a config.
///
/// Random seats get successive forks of a master `GameRng` seeded with
/// `config.seed`. Human seats get their input from `make_input`.
pub fn build_agents<F>(config: &GameConfig, mut make_input: F) -> SeatMap<Box<dyn Agent>>
where
    F: FnMut(Seat) -> Box<dyn MoveInput + Send>,
{
    let mut master = GameRng::new(config.seed);

    SeatMap::new(|seat| -> Box<dyn Agent> {
        match config.agent_kind(seat) {
            AgentKind::Human => Box::new(
                HumanAgent::new(make_input(seat)).with_max_retries(config.max_human_retries),
            ),
            AgentKind::Random => Box::new(RandomAgent::from_rng(master.fork())),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_agents_follows_config() {
        let config = GameConfig::default().with_agents(AgentKind::Random, AgentKind::Human);
        let mut asked = Vec::new();

        let agents = build_agents(&config, |seat| {
            asked.push(seat);
            Box::new(ScriptedInput::default())
        });

        assert_eq!(agents[Seat::FIRST].kind(), AgentKind::Random);
        assert_eq!(agents[Seat::SECOND].kind(), AgentKind::Human);
        assert_eq!(asked, vec![Seat::SECOND]);
    }

    #[test]
    fn test_random_seats_draw_different_streams() {
        let config = GameConfig::default()
            .with_seed(11)
            .with_agents(AgentKind::Random, AgentKind::Random);
        let mut agents = build_agents(&config, |_| Box::new(ScriptedInput::default()));

        let board = Board::new();
        let first: Vec<_> = (0..8)
            .map(|_| agents[Seat::FIRST].propose_move(&board, Symbol::X).unwrap())
            .collect();
        let second: Vec<_> = (0..8)
            .map(|_| agents[Seat::SECOND].propose_move(&board, Symbol::O).unwrap())
            .collect();

        assert_ne!(first, second);
    }
}
