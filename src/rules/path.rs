//! Goal connectivity: breadth-first reachability over the wall-blocked grid.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::wall::{step_blocked, WallSet};
use crate::core::{BoardConfig, Position};

/// Whether a pawn at `start` can reach any cell of `goal_row` by orthogonal
/// steps that no wall in `walls` blocks.
///
/// Exact breadth-first search; each cell is visited at most once. A pawn
/// already standing on its goal row trivially has a path. Exactness
/// matters on both sides: a false negative would illegally trap a player,
/// a false positive would let the board become unsolvable.
#[must_use]
pub fn has_path_to_goal(
    board: BoardConfig,
    walls: &WallSet,
    start: Position,
    goal_row: i16,
) -> bool {
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current.y == goal_row {
            return true;
        }

        for neighbor in current.neighbors() {
            if !board.contains(neighbor)
                || visited.contains(&neighbor)
                || step_blocked(walls, current, neighbor)
            {
                continue;
            }

            visited.insert(neighbor);
            queue.push_back(neighbor);
        }
    }

    false
}
