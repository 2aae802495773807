//! # palisade
//!
//! Rules and legality engine for a two-player wall-and-pawn race game:
//! each player races their pawn to the far edge of a square board while
//! spending a limited stock of two-cell walls to slow the opponent down.
//!
//! ## Design Principles
//!
//! 1. **Verdicts, not exceptions**: Illegal moves and wall placements are
//!    ordinary inputs. Every legality query returns `bool`; errors are
//!    reserved for caller contract violations at the session boundary.
//!
//! 2. **Snapshots in, verdicts out**: The engine never mutates game state.
//!    Every check takes `&GameState`; speculative wall placement runs
//!    against a scratch copy of the persistent wall set.
//!
//! 3. **Configuration Over Convention**: Board size and wall budget live in
//!    `BoardConfig`. Nothing in the rules hardcodes a 9x9 board.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`. Validating a
//!   wall clones the wall set, inserts the candidate, and path-checks the
//!   scratch copy; the real state is untouched by construction.
//!
//! - **Connectivity Invariant**: A wall placement is only legal if both
//!   pawns keep at least one path to their goal rows. Checked by exact BFS
//!   before every acceptance.
//!
//! - **Capability Traits**: `MoveLegality`, `WallLegality`, and
//!   `MoveEnumeration` are the seams hosts program against; `Ruleset` is
//!   the single canonical implementation.
//!
//! ## Modules
//!
//! - `core`: Positions, walls, players, board configuration, game state
//! - `rules`: Legality verdicts, jump resolution, path connectivity
//! - `session`: Match lifecycle driving the engine (turns, budgets, wins)

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    BoardConfig,
    Direction, Wall, WallSet,
    GameState, GameStatus,
    Player, PlayerId, PerPlayer,
    Position,
};

pub use crate::rules::{
    MoveEnumeration, MoveLegality, Ruleset, WallLegality,
    has_path_to_goal,
};

pub use crate::session::{GameSession, SessionError};
