//! # rust-ttt
//!
//! A turn-based two-player tic-tac-toe engine.
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: The referee owns the board. Agents only ever see
//!    `&Board`, so no move reaches the grid except through the referee.
//!
//! 2. **One Legality Rule**: `board::validate_move` decides what may be
//!    played. The board enforces it on every write and the human agent
//!    uses it to re-prompt, so the two can never disagree.
//!
//! 3. **No I/O in the Engine**: Rendering and input are collaborators
//!    behind `GameObserver` and `MoveInput`. The `console` module provides
//!    terminal versions of both.
//!
//! ## Modules
//!
//! - `core`: Seats, symbols, coordinates, RNG, configuration, move records
//! - `board`: The grid, checked access, line evaluation, move validation
//! - `agents`: The `Agent` trait with human and random implementations
//! - `referee`: The turn state machine and game loop
//! - `console`: Terminal rendering and input
//! - `error`: Error types for every layer
//!
//! ## Example
//!
//! ```
//! use rust_ttt::{HumanAgent, Outcome, Referee, ScriptedInput, Symbol};
//!
//! let x = HumanAgent::new(ScriptedInput::new(["0,0", "0,1", "0,2"]));
//! let o = HumanAgent::new(ScriptedInput::new(["1,0", "1,1"]));
//!
//! let mut referee = Referee::with_agents(x, o);
//! assert_eq!(referee.run().unwrap(), Outcome::Win(Symbol::X));
//! ```

pub mod agents;
pub mod board;
pub mod console;
pub mod core;
pub mod error;
pub mod referee;

// Re-export commonly used types
pub use crate::core::{AgentKind, Coord, GameConfig, GameRng, MoveRecord, Seat, SeatMap, Symbol};

pub use crate::board::{validate_move, Board, Cell, BOARD_SIZE};

pub use crate::agents::{build_agents, Agent, HumanAgent, MoveInput, RandomAgent, ScriptedInput};

pub use crate::referee::{GameObserver, Outcome, Referee, RefereeState};

pub use crate::error::{AgentError, EngineError, InputError, MoveError, Result};
