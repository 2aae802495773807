//! Board positions and grid adjacency.
//!
//! Coordinates are signed so that neighbor enumeration can step off the
//! board; bounds live in `BoardConfig::contains`, and every caller decides
//! explicitly what to do with off-board cells.

use serde::{Deserialize, Serialize};

/// A cell on the board, addressed by column (`x`) and row (`y`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    /// Create a position from column and row coordinates.
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Whether `other` is exactly one orthogonal step away (no diagonals).
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// The four orthogonal neighbors, in fixed order: west, east, north,
    /// south. Not bounds-filtered. Move enumeration relies on this order
    /// being stable.
    #[must_use]
    pub const fn neighbors(self) -> [Position; 4] {
        [
            Position::new(self.x - 1, self.y),
            Position::new(self.x + 1, self.y),
            Position::new(self.x, self.y - 1),
            Position::new(self.x, self.y + 1),
        ]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
