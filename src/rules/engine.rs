//! Legality verdicts over match snapshots.
//!
//! ## Capability traits
//!
//! Hosts depend on the narrow capability they need:
//! - `MoveLegality`: validate a single step or jump
//! - `WallLegality`: validate a wall placement
//! - `MoveEnumeration`: list every cell a pawn may move to
//!
//! `Ruleset` is the one canonical implementation of all three, carrying
//! the board configuration it judges against.
//!
//! Every method reads `&GameState` and returns a verdict. Illegal input is
//! an expected, user-driven condition and is reported as `false`, never as
//! an error or panic.

use smallvec::SmallVec;
use tracing::debug;

use crate::core::wall::step_blocked;
use crate::core::{BoardConfig, GameState, PlayerId, Position, Wall};

use super::jump::is_jump_destination;
use super::path::has_path_to_goal;

/// Verdict on a single pawn move.
pub trait MoveLegality {
    /// Whether `player` may move their pawn to `target`.
    fn is_move_valid(&self, state: &GameState, player: PlayerId, target: Position) -> bool;
}

/// Verdict on a wall placement.
pub trait WallLegality {
    /// Whether `player` may stand `wall` on the board.
    ///
    /// Covers the placing player's wall budget, wall shape and bounds, the
    /// strict overlap rule, and the connectivity invariant: a placement
    /// that would cut either pawn off from its goal row is rejected.
    fn is_wall_placement_valid(&self, state: &GameState, player: PlayerId, wall: Wall) -> bool;
}

/// Enumeration of a pawn's move options.
pub trait MoveEnumeration {
    /// Every cell `player` may move to: at most eight entries, in
    /// deterministic order (west/east/north/south around the pawn, then
    /// the same sweep around the opponent when a jump is live).
    fn possible_moves(&self, state: &GameState, player: PlayerId) -> SmallVec<[Position; 8]>;
}

/// The canonical rules implementation for a given board configuration.
///
/// Stateless across calls and safe to share between threads; concurrent
/// verdicts over shared snapshots never interfere.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ruleset {
    board: BoardConfig,
}

impl Ruleset {
    /// Rules for the given board.
    #[must_use]
    pub const fn new(board: BoardConfig) -> Self {
        Self { board }
    }

    /// The board this ruleset judges against.
    #[must_use]
    pub const fn board(&self) -> BoardConfig {
        self.board
    }
}

impl MoveLegality for Ruleset {
    fn is_move_valid(&self, state: &GameState, player: PlayerId, target: Position) -> bool {
        let mover = state.player(player).position;
        let opponent = state.player(player.opponent()).position;

        if target == opponent {
            return false;
        }

        if !self.board.contains(target) {
            return false;
        }

        // Jump targets sit two cells away and would fail the adjacency
        // rule below, so they are resolved first.
        if is_jump_destination(self.board, &state.walls, mover, opponent, target) {
            return true;
        }

        mover.is_adjacent(target) && !step_blocked(&state.walls, mover, target)
    }
}

impl WallLegality for Ruleset {
    fn is_wall_placement_valid(&self, state: &GameState, player: PlayerId, wall: Wall) -> bool {
        if state.player(player).walls_remaining == 0 {
            return false;
        }

        if wall.anchor_a == wall.anchor_b {
            return false;
        }

        if !wall.is_within(self.board) {
            return false;
        }

        if state.walls.iter().any(|existing| existing.overlaps(wall)) {
            return false;
        }

        // Speculative placement against a scratch copy. The clone is O(1)
        // and shares structure; the live set is never touched.
        let mut scratch = state.walls.clone();
        scratch.insert(wall);

        for seat in PlayerId::both() {
            let pawn = state.player(seat);
            if !has_path_to_goal(self.board, &scratch, pawn.position, pawn.goal_row) {
                debug!(%seat, ?wall, "wall rejected: would sever path to goal");
                return false;
            }
        }

        true
    }
}

impl MoveEnumeration for Ruleset {
    fn possible_moves(&self, state: &GameState, player: PlayerId) -> SmallVec<[Position; 8]> {
        let mover = state.player(player).position;
        let opponent = state.player(player.opponent()).position;

        let mut moves = SmallVec::new();

        for target in mover.neighbors() {
            if self.is_move_valid(state, player, target) {
                moves.push(target);
            }
        }

        if mover.is_adjacent(opponent) {
            for target in opponent.neighbors() {
                if self.is_move_valid(state, player, target) {
                    moves.push(target);
                }
            }
        }

        moves
    }
}
