//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. A showcase duel always has exactly two
//! seats, 0 and 1.
//!
//! ## PlayerPair
//!
//! Fixed two-slot per-player storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier for a two-player duel.
///
/// Seats are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Only seats 0 and 1 exist; higher values are reduced modulo 2.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id % 2)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    ///
    /// ```
    /// use showcase_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).other(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).other(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self((self.0 + 1) % 2)
    }

    /// Iterate over both seats in order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..2u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A duel participant: display name plus running score.
///
/// Scores are mutated only by the engine and never decrease within a
/// session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name entered at setup.
    pub name: String,

    /// Correct answers so far.
    pub score: u32,
}

impl Player {
    /// Create a player with a zero score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

/// Per-player data storage for exactly two seats.
///
/// ## Example
///
/// ```
/// use showcase_duel::core::{PlayerId, PlayerPair};
///
/// let mut flags = PlayerPair::with_value(false);
/// flags[PlayerId::new(1)] = true;
///
/// assert!(!flags[PlayerId::new(0)]);
/// assert!(flags[PlayerId::new(1)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::new(0)), factory(PlayerId::new(1))],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// True if the predicate holds for both seats.
    pub fn all(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.data.iter().all(predicate)
    }

    /// The first seat whose entry matches the predicate, if any.
    ///
    /// Checks seat 0 first.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<PlayerId> {
        self.iter().find(|(_, v)| predicate(v)).map(|(p, _)| p)
    }

    /// Convert into a plain two-element array, seat 0 first.
    pub fn into_array(self) -> [T; 2] {
        self.data
    }

    /// Copy out a plain two-element array, seat 0 first.
    #[must_use]
    pub fn to_array(&self) -> [T; 2]
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
