//! Game session: turn order, commits, and match results.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

use crate::core::{Action, BoardConfig, GameState, GameStatus, PlayerId, Position, Wall};
use crate::rules::{MoveEnumeration, MoveLegality, Ruleset, WallLegality};

/// Why the session refused a request.
///
/// Everything here is a caller-side condition: acting out of turn, acting
/// on a finished match, proposing an action the rules reject, or naming a
/// user who holds no seat.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("game is not in progress")]
    NotInProgress,

    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("illegal move to {0}")]
    IllegalMove(Position),

    #[error("illegal wall placement: {0:?}")]
    IllegalWall(Wall),

    #[error("no seat for user {0:?}")]
    UnknownUser(String),
}

/// A running match: live state plus the rules that govern it.
///
/// The session serializes state transitions. Concurrent hosts hold one
/// session per match and feed it one validated action at a time; reads
/// can fan out freely over cloned snapshots.
#[derive(Clone, Debug)]
pub struct GameSession {
    rules: Ruleset,
    state: GameState,
}

impl GameSession {
    /// Start a fresh match between two users on `board`.
    #[must_use]
    pub fn new(
        board: BoardConfig,
        user_one: impl Into<String>,
        user_two: impl Into<String>,
    ) -> Self {
        Self {
            rules: Ruleset::new(board),
            state: GameState::initial(board, user_one, user_two),
        }
    }

    /// The live state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The ruleset governing this match.
    #[must_use]
    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    /// Which seat a user id occupies.
    ///
    /// External ids are resolved exactly once, here. An unknown id is a
    /// caller contract violation and fails fast rather than mapping to a
    /// quiet `false` somewhere downstream.
    pub fn seat_of(&self, user_id: &str) -> Result<PlayerId, SessionError> {
        self.state
            .seat_of(user_id)
            .ok_or_else(|| SessionError::UnknownUser(user_id.to_string()))
    }

    /// Every cell `player` could currently step or jump to.
    #[must_use]
    pub fn possible_moves(&self, player: PlayerId) -> SmallVec<[Position; 8]> {
        self.rules.possible_moves(&self.state, player)
    }

    /// Validate and commit one action for `player`.
    ///
    /// On success the board is updated, the action recorded, and either
    /// the winner declared (pawn standing on its goal row) or the turn
    /// passed to the opponent. On failure nothing changes.
    pub fn apply(&mut self, player: PlayerId, action: Action) -> Result<(), SessionError> {
        if self.state.status != GameStatus::InProgress {
            return Err(SessionError::NotInProgress);
        }

        if self.state.turn != player {
            return Err(SessionError::NotYourTurn(player));
        }

        match action {
            Action::Move { position } => {
                if !self.rules.is_move_valid(&self.state, player, position) {
                    debug!(%player, %position, "move rejected");
                    return Err(SessionError::IllegalMove(position));
                }
                self.state.player_mut(player).position = position;
            }
            Action::PlaceWall { wall } => {
                if !self.rules.is_wall_placement_valid(&self.state, player, wall) {
                    debug!(%player, ?wall, "wall placement rejected");
                    return Err(SessionError::IllegalWall(wall));
                }
                self.state.walls.insert(wall);
                self.state.player_mut(player).walls_remaining -= 1;
            }
        }

        self.state.record_action(player, action);
        debug!(%player, ply = self.state.moves.len(), "action committed");

        if self.pawn_on_goal(player) {
            self.state.status = GameStatus::Completed;
            self.state.winner = Some(player);
        } else {
            self.state.turn = player.opponent();
        }

        Ok(())
    }

    /// Concede the match; the opponent wins.
    pub fn resign(&mut self, player: PlayerId) -> Result<(), SessionError> {
        if self.state.status != GameStatus::InProgress {
            return Err(SessionError::NotInProgress);
        }

        debug!(%player, "resigned");
        self.state.status = GameStatus::Completed;
        self.state.winner = Some(player.opponent());
        Ok(())
    }

    /// Tear the match down without a result.
    pub fn abort(&mut self) -> Result<(), SessionError> {
        if self.state.status != GameStatus::InProgress {
            return Err(SessionError::NotInProgress);
        }

        debug!("match aborted");
        self.state.status = GameStatus::Aborted;
        Ok(())
    }

    fn pawn_on_goal(&self, player: PlayerId) -> bool {
        let pawn = self.state.player(player);
        pawn.position.y == pawn.goal_row
    }
}
