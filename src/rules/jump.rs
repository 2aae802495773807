//! Jump resolution: the extra destinations that open up when the opponent
//! stands on an adjacent cell.
//!
//! The straight jump over the opponent is preferred and, when open, is the
//! only jump destination. Side jumps become legal exactly when the cell
//! straight behind the opponent is obstructed, whether by a wall or by the
//! board edge.

use crate::core::wall::{step_blocked, WallSet};
use crate::core::{BoardConfig, Position};

/// Whether `target` is a legal jump destination for a pawn at `player`
/// facing an opponent pawn at `opponent`.
///
/// Jumps require the pawns to be adjacent with no wall between them.
/// `target` is then legal if it is:
///
/// - the cell straight behind the opponent, when that cell is on the board
///   and not walled off from the opponent; or
/// - any neighbor of the opponent's cell other than the player's own,
///   on the board and not walled off from the opponent, when the straight
///   cell is obstructed.
#[must_use]
pub fn is_jump_destination(
    board: BoardConfig,
    walls: &WallSet,
    player: Position,
    opponent: Position,
    target: Position,
) -> bool {
    if !player.is_adjacent(opponent) || step_blocked(walls, player, opponent) {
        return false;
    }

    let behind = Position::new(
        opponent.x + (opponent.x - player.x),
        opponent.y + (opponent.y - player.y),
    );

    if board.contains(behind) && !step_blocked(walls, opponent, behind) {
        return target == behind;
    }

    // Straight jump obstructed: fan out around the opponent instead.
    target != player
        && target.is_adjacent(opponent)
        && board.contains(target)
        && !step_blocked(walls, opponent, target)
}
