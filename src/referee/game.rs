//! The referee: owns the board and both agents, and drives the turn loop.

use im::Vector;
use tracing::{debug, error, info, instrument};

use super::observer::GameObserver;
use super::state::{Outcome, RefereeState};
use crate::agents::{build_agents, Agent, MoveInput};
use crate::board::Board;
use crate::core::{AgentKind, GameConfig, MoveRecord, Seat, SeatMap, Symbol};
use crate::error::{EngineError, Result};

/// Runs one game.
///
/// Each `step` asks the seat on turn for a move, writes it to the board,
/// then checks for a line (win) before checking for a full board (draw).
/// An agent error or an illegal move halts the game for good; the referee
/// never repairs a move.
///
/// ```
/// use rust_ttt::agents::RandomAgent;
/// use rust_ttt::referee::Referee;
///
/// let mut referee = Referee::with_agents(RandomAgent::new(1), RandomAgent::new(2));
/// let outcome = referee.run().unwrap();
///
/// assert!(outcome.is_terminal());
/// assert!(referee.history().len() >= 5);
/// ```
pub struct Referee {
    board: Board,
    agents: SeatMap<Box<dyn Agent>>,
    symbols: SeatMap<Symbol>,
    state: RefereeState,
    history: Vector<MoveRecord>,
    halted: bool,
}

impl Referee {
    /// Create a referee with an empty board. Seat 0 plays X and moves first.
    #[must_use]
    pub fn new(agents: SeatMap<Box<dyn Agent>>) -> Self {
        Self {
            board: Board::new(),
            agents,
            symbols: SeatMap::new(Symbol::for_seat),
            state: RefereeState::default(),
            history: Vector::new(),
            halted: false,
        }
    }

    /// Create a referee from two concrete agents.
    #[must_use]
    pub fn with_agents(first: impl Agent + 'static, second: impl Agent + 'static) -> Self {
        let first: Box<dyn Agent> = Box::new(first);
        let second: Box<dyn Agent> = Box::new(second);
        Self::new(SeatMap::from_pair(first, second))
    }

    /// Create a referee with agents built from `config`.
    #[must_use]
    pub fn from_config<F>(config: &GameConfig, make_input: F) -> Self
    where
        F: FnMut(Seat) -> Box<dyn MoveInput + Send>,
    {
        Self::new(build_agents(config, make_input))
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> RefereeState {
        self.state
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Moves applied so far, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn symbol(&self, seat: Seat) -> Symbol {
        self.symbols[seat]
    }

    #[must_use]
    pub fn agent_kind(&self, seat: Seat) -> AgentKind {
        self.agents[seat].kind()
    }

    /// True once an error has stopped the game.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Play one move.
    ///
    /// Fails with `GameOver` once the game is decided and with `Halted`
    /// after any earlier error.
    #[instrument(level = "debug", skip(self), fields(state = ?self.state))]
    pub fn step(&mut self) -> Result<MoveRecord> {
        if self.halted {
            return Err(EngineError::Halted);
        }

        let Some(seat) = self.state.to_move() else {
            return Err(EngineError::GameOver {
                outcome: self.outcome(),
            });
        };
        let symbol = self.symbols[seat];

        let coord = match self.agents[seat].propose_move(&self.board, symbol) {
            Ok(coord) => coord,
            Err(source) => {
                self.halted = true;
                error!(%seat, %symbol, error = %source, "agent failed to move");
                return Err(EngineError::Agent {
                    seat,
                    symbol,
                    source,
                });
            }
        };

        if let Err(source) = self.board.set(coord.row, coord.col, symbol) {
            self.halted = true;
            error!(%seat, %symbol, %coord, error = %source, "agent proposed an illegal move");
            return Err(EngineError::Fault {
                seat,
                symbol,
                coord,
                source,
            });
        }

        let record = MoveRecord::new(self.history.len() as u32 + 1, seat, symbol, coord);
        self.history.push_back(record);

        // Line before fullness: a last move that does both is a win.
        self.state = match self.board.winner() {
            Some(winner) => RefereeState::Won(winner),
            None if self.board.is_full() => RefereeState::Draw,
            None => RefereeState::AwaitingMove(seat.next()),
        };

        debug!(%record, next = ?self.state, "move applied");
        if self.state.is_terminal() {
            info!(outcome = %self.outcome(), plies = self.history.len(), "game over");
        }

        Ok(record)
    }

    /// Play to a terminal outcome, reporting to `observer` along the way.
    pub fn play<O: GameObserver>(&mut self, mut observer: O) -> Result<Outcome> {
        if self.halted {
            return Err(EngineError::Halted);
        }
        if self.state.is_terminal() {
            return Err(EngineError::GameOver {
                outcome: self.outcome(),
            });
        }

        info!(
            first = %self.agent_kind(Seat::FIRST),
            second = %self.agent_kind(Seat::SECOND),
            "game started"
        );
        observer.on_start(&self.board)?;

        while let Some(seat) = self.state.to_move() {
            observer.on_turn(seat, self.symbols[seat], self.agents[seat].kind())?;
            let record = self.step()?;
            observer.on_move(&record, &self.board)?;
        }

        let outcome = self.outcome();
        observer.on_finish(outcome, &self.board)?;
        Ok(outcome)
    }

    /// Play to a terminal outcome without an observer.
    pub fn run(&mut self) -> Result<Outcome> {
        self.play(())
    }
}

impl std::fmt::Debug for Referee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Referee")
            .field("board", &self.board)
            .field("agents", &SeatMap::new(|seat| self.agents[seat].kind()))
            .field("state", &self.state)
            .field("plies", &self.history.len())
            .field("halted", &self.halted)
            .finish()
    }
}
