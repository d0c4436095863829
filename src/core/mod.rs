//! Core engine types: seats, symbols, coordinates, RNG, configuration,
//! move records.

pub mod config;
pub mod coord;
pub mod player;
pub mod record;
pub mod rng;

pub use config::{AgentKind, GameConfig};
pub use coord::Coord;
pub use player::{Seat, SeatMap, Symbol, SEAT_COUNT};
pub use record::MoveRecord;
pub use rng::GameRng;
