//! Player identity and per-player data storage.
//!
//! ## PlayerId
//!
//! The two seats of a match. The rules API is typed against this enum, so
//! an unknown player can never reach a legality check; external user ids
//! are resolved to seats at the session boundary.
//!
//! ## PerPlayer
//!
//! Two-slot per-seat storage with indexing and iteration.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::Position;

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Both seats, in play order.
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [PlayerId::One, PlayerId::Two]
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "Player 1"),
            PlayerId::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-seat data storage.
///
/// ## Example
///
/// ```
/// use palisade::core::{PerPlayer, PlayerId};
///
/// let mut budgets: PerPlayer<u8> = PerPlayer::with_value(10);
/// budgets[PlayerId::Two] -= 1;
///
/// assert_eq!(budgets[PlayerId::One], 10);
/// assert_eq!(budgets[PlayerId::Two], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    one: T,
    two: T,
}

impl<T> PerPlayer<T> {
    /// Create with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            one: factory(PlayerId::One),
            two: factory(PlayerId::Two),
        }
    }

    /// Create with both slots set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            one: value.clone(),
            two: value,
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }

    /// Iterate over `(PlayerId, &T)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [(PlayerId::One, &self.one), (PlayerId::Two, &self.two)].into_iter()
    }
}

impl<T> Index<PlayerId> for PerPlayer<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PerPlayer<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Everything the rules need to know about one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// External identity of the person in this seat.
    pub user_id: String,
    /// Current pawn cell.
    pub position: Position,
    /// The row this player is racing to reach.
    pub goal_row: i16,
    /// Walls left to place.
    pub walls_remaining: u8,
}
