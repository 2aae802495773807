//! Legality verdicts: moves, jumps, wall placements, connectivity.
//!
//! Hosts program against the capability traits (`MoveLegality`,
//! `WallLegality`, `MoveEnumeration`); `Ruleset` is the single canonical
//! implementation of all three. Everything here reads `&GameState`
//! snapshots and returns verdicts; nothing in this module mutates.

pub mod engine;
pub mod jump;
pub mod path;

pub use engine::{MoveEnumeration, MoveLegality, Ruleset, WallLegality};
pub use jump::is_jump_destination;
pub use path::has_path_to_goal;
