//! Board configuration.
//!
//! Board size, wall budget, and the derived start/goal geometry are
//! threaded through engine and session construction instead of living as
//! literals inside the rules. Alternate board sizes are exercised in tests
//! without touching rule code.

use serde::{Deserialize, Serialize};

use super::{PlayerId, Position};

/// Board dimensions and per-player wall budget.
///
/// The classic game runs on a 9x9 board with 10 walls per player, which is
/// what `BoardConfig::default()` gives. The rules only assume the board is
/// square and at least 2x2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Cells per side.
    pub size: i16,

    /// Walls each player may place over the whole game.
    pub wall_budget: u8,
}

impl BoardConfig {
    /// Create a configuration with the given side length and wall budget.
    ///
    /// A zero wall budget is legal (a pure pawn race).
    #[must_use]
    pub fn new(size: i16, wall_budget: u8) -> Self {
        assert!(size >= 2, "Board must be at least 2x2");
        assert!(size <= 25, "Board size above 25 is not supported");

        Self { size, wall_budget }
    }

    /// Whether a cell lies on the board.
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size && pos.y >= 0 && pos.y < self.size
    }

    /// Starting cell for a seat: the center of its own edge.
    #[must_use]
    pub fn start_position(self, player: PlayerId) -> Position {
        let center = self.size / 2;
        match player {
            PlayerId::One => Position::new(center, 0),
            PlayerId::Two => Position::new(center, self.size - 1),
        }
    }

    /// The row a seat must reach to win: the opposite edge.
    #[must_use]
    pub fn goal_row(self, player: PlayerId) -> i16 {
        match player {
            PlayerId::One => self.size - 1,
            PlayerId::Two => 0,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(9, 10)
    }
}
