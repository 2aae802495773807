//! Core game types: positions, walls, players, configuration, state.
//!
//! Everything here is a plain value type shared by the rules engine and the
//! match session. Legality logic lives in `crate::rules`; lifecycle logic
//! lives in `crate::session`.

pub mod position;
pub mod player;
pub mod wall;
pub mod config;
pub mod state;

pub use position::Position;
pub use player::{PerPlayer, Player, PlayerId};
pub use wall::{step_blocked, Direction, Wall, WallSet};
pub use config::BoardConfig;
pub use state::{Action, ActionRecord, GameState, GameStatus};
