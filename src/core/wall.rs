//! Wall geometry: orientation, bounds, overlap, and step blocking.
//!
//! A wall is two cells long and sits between two rows or two columns. It is
//! stored as a direction plus two anchor cells in canonical form:
//!
//! - A **horizontal** wall anchored at `(x, y)` has anchors `(x, y)` and
//!   `(x, y + 1)` and blocks crossing between rows `y` and `y + 1` at
//!   columns `x` and `x + 1`.
//! - A **vertical** wall anchored at `(x, y)` has anchors `(x, y)` and
//!   `(x + 1, y)` and blocks crossing between columns `x` and `x + 1` at
//!   rows `y` and `y + 1`.
//!
//! Blocking is strictly perpendicular: a horizontal wall never obstructs a
//! sideways step, and a vertical wall never obstructs an up/down step.
//!
//! ## Overlap rule
//!
//! Two walls conflict when they run in the same direction along the same
//! line and their anchors are less than two cells apart. Anchors exactly
//! two apart (end-to-end placement) do not conflict, and perpendicular
//! walls never conflict even when they share an anchor cell.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};

use super::{BoardConfig, Position};

/// Orientation of a wall segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
}

/// The set of walls standing on a board.
///
/// Persistent: `clone()` is O(1) and shares structure, so speculative
/// placement checks can work on a scratch copy without touching the
/// original.
pub type WallSet = ImHashSet<Wall>;

/// A two-cell blocking wall, stored in canonical anchor form.
///
/// Build walls with [`Wall::horizontal`] / [`Wall::vertical`]; the fields
/// stay public for serialization, and the placement pipeline rejects
/// identical anchors but otherwise trusts anchors as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub direction: Direction,
    pub anchor_a: Position,
    pub anchor_b: Position,
}

impl Wall {
    /// Canonical horizontal wall anchored at `(x, y)`: blocks crossing
    /// between rows `y` and `y + 1` at columns `x` and `x + 1`.
    #[must_use]
    pub const fn horizontal(x: i16, y: i16) -> Self {
        Self {
            direction: Direction::Horizontal,
            anchor_a: Position::new(x, y),
            anchor_b: Position::new(x, y + 1),
        }
    }

    /// Canonical vertical wall anchored at `(x, y)`: blocks crossing
    /// between columns `x` and `x + 1` at rows `y` and `y + 1`.
    #[must_use]
    pub const fn vertical(x: i16, y: i16) -> Self {
        Self {
            direction: Direction::Vertical,
            anchor_a: Position::new(x, y),
            anchor_b: Position::new(x + 1, y),
        }
    }

    /// Whether the wall sits fully on the board: both anchors plus the
    /// second column (horizontal) or row (vertical) the segment spans.
    #[must_use]
    pub fn is_within(self, board: BoardConfig) -> bool {
        let (dx, dy) = match self.direction {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
        };

        board.contains(self.anchor_a)
            && board.contains(self.anchor_b)
            && board.contains(Position::new(self.anchor_a.x + dx, self.anchor_a.y + dy))
            && board.contains(Position::new(self.anchor_b.x + dx, self.anchor_b.y + dy))
    }

    /// Strict overlap test: same direction, same line (anchor pair on the
    /// orthogonal axis matches in either order), anchors less than two
    /// cells apart along the line.
    #[must_use]
    pub fn overlaps(self, other: Wall) -> bool {
        if self.direction != other.direction {
            return false;
        }

        match self.direction {
            Direction::Horizontal => {
                pair_matches(
                    (self.anchor_a.y, self.anchor_b.y),
                    (other.anchor_a.y, other.anchor_b.y),
                ) && (self.anchor_a.x - other.anchor_a.x).abs() <= 1
            }
            Direction::Vertical => {
                pair_matches(
                    (self.anchor_a.x, self.anchor_b.x),
                    (other.anchor_a.x, other.anchor_b.x),
                ) && (self.anchor_a.y - other.anchor_a.y).abs() <= 1
            }
        }
    }

    /// Whether this wall blocks the unit step `from -> to`.
    ///
    /// Only perpendicular steps can be blocked: the step's coordinate pair
    /// on the wall's axis must match the anchor pair (either order), and
    /// the step must lie in one of the two lanes the wall spans.
    #[must_use]
    pub fn blocks_step(self, from: Position, to: Position) -> bool {
        match self.direction {
            Direction::Horizontal => {
                from.x == to.x
                    && pair_matches((self.anchor_a.y, self.anchor_b.y), (from.y, to.y))
                    && (self.anchor_a.x == from.x || self.anchor_a.x + 1 == from.x)
            }
            Direction::Vertical => {
                from.y == to.y
                    && pair_matches((self.anchor_a.x, self.anchor_b.x), (from.x, to.x))
                    && (self.anchor_a.y == from.y || self.anchor_a.y + 1 == from.y)
            }
        }
    }
}

/// Whether any wall in the set blocks the unit step `from -> to`.
#[must_use]
pub fn step_blocked(walls: &WallSet, from: Position, to: Position) -> bool {
    walls.iter().any(|wall| wall.blocks_step(from, to))
}

fn pair_matches(a: (i16, i16), b: (i16, i16)) -> bool {
    a == b || a == (b.1, b.0)
}
