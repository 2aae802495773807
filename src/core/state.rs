//! Match state and action records.
//!
//! ## GameState
//!
//! One snapshot of a match: pawn positions, standing walls, whose turn it
//! is, lifecycle status, and the committed action history. Built on `im`
//! persistent containers, so cloning a snapshot is O(1) and a speculative
//! wall check can share structure with the live state it was cloned from.
//!
//! The rules engine only ever reads `&GameState`; all mutation goes
//! through the session layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::BoardConfig;
use super::player::{PerPlayer, Player, PlayerId};
use super::position::Position;
use super::wall::{Wall, WallSet};

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Created but not yet started (seats still filling).
    Pending,
    /// Running; actions are accepted.
    InProgress,
    /// Over with a winner.
    Completed,
    /// Torn down without a result.
    Aborted,
}

/// A player-proposed game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Step or jump the pawn to a cell.
    Move { position: Position },
    /// Spend one wall from the budget.
    PlaceWall { wall: Wall },
}

/// One committed action in a match's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat that acted.
    pub player: PlayerId,

    /// What they did.
    pub action: Action,

    /// 1-based position in the move sequence.
    pub ply: u32,
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Lifecycle status.
    pub status: GameStatus,

    /// Winning seat. Set exactly when `status` is `Completed`.
    pub winner: Option<PlayerId>,

    /// Seat to act next.
    pub turn: PlayerId,

    /// Both players.
    pub players: PerPlayer<Player>,

    /// Standing walls.
    pub walls: WallSet,

    /// Committed actions, oldest first.
    pub moves: Vector<ActionRecord>,
}

impl GameState {
    /// Starting state for a fresh match on `board`: pawns at the center of
    /// their own edges, goals opposite, full wall budgets, player One to
    /// move.
    #[must_use]
    pub fn initial(
        board: BoardConfig,
        user_one: impl Into<String>,
        user_two: impl Into<String>,
    ) -> Self {
        let user_one = user_one.into();
        let user_two = user_two.into();

        let players = PerPlayer::new(|p| Player {
            user_id: match p {
                PlayerId::One => user_one.clone(),
                PlayerId::Two => user_two.clone(),
            },
            position: board.start_position(p),
            goal_row: board.goal_row(p),
            walls_remaining: board.wall_budget,
        });

        Self {
            status: GameStatus::InProgress,
            winner: None,
            turn: PlayerId::One,
            players,
            walls: WallSet::new(),
            moves: Vector::new(),
        }
    }

    /// A seat's player record.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Mutable access to a seat's player record.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Which seat an external user id occupies, if any.
    #[must_use]
    pub fn seat_of(&self, user_id: &str) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.user_id == user_id)
            .map(|(id, _)| id)
    }

    /// Append an action to the history with the next ply number.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        let ply = self.moves.len() as u32 + 1;
        self.moves.push_back(ActionRecord { player, action, ply });
    }
}
