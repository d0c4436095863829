//! Player identity: seats and symbols.
//!
//! ## Seat
//!
//! Turn index of a player. Seat 0 moves first, seat 1 second.
//!
//! ## Symbol
//!
//! The mark a player writes into cells. Seat 0 always plays `X`,
//! seat 1 always plays `O`.
//!
//! ## SeatMap
//!
//! Per-seat storage with exactly one entry per seat, indexable by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a game.
pub const SEAT_COUNT: usize = 2;

/// Turn index of a player (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// The first mover.
    pub const FIRST: Seat = Seat(0);
    /// The second mover.
    pub const SECOND: Seat = Seat(1);

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat that moves after this one: `(i + 1) mod 2`.
    #[must_use]
    pub const fn next(self) -> Self {
        Seat((self.0 + 1) % SEAT_COUNT as u8)
    }

    /// Both seats in turn order.
    ///
    /// ```
    /// use rust_ttt::core::Seat;
    ///
    /// let seats: Vec<_> = Seat::all().collect();
    /// assert_eq!(seats, vec![Seat::FIRST, Seat::SECOND]);
    /// ```
    pub fn all() -> impl Iterator<Item = Seat> {
        [Seat::FIRST, Seat::SECOND].into_iter()
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    /// Both symbols, first mover first.
    pub const ALL: [Symbol; SEAT_COUNT] = [Symbol::X, Symbol::O];

    /// The symbol assigned to a seat.
    #[must_use]
    pub const fn for_seat(seat: Seat) -> Self {
        match seat.index() {
            0 => Symbol::X,
            _ => Symbol::O,
        }
    }

    /// The other player's symbol.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Per-seat storage.
///
/// ## Example
///
/// ```
/// use rust_ttt::core::{Seat, SeatMap};
///
/// let mut wins: SeatMap<u32> = SeatMap::with_value(0);
/// wins[Seat::SECOND] += 1;
///
/// assert_eq!(wins[Seat::FIRST], 0);
/// assert_eq!(wins[Seat::SECOND], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a SeatMap with values from a factory, called once per seat
    /// in turn order.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        let first = factory(Seat::FIRST);
        let second = factory(Seat::SECOND);
        Self::from_pair(first, second)
    }

    /// Create a SeatMap from the first and second seat's values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::all().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
