//! Match lifecycle around the rules engine.
//!
//! The engine judges; the session governs. `GameSession` owns the live
//! `GameState`, enforces turn order and lifecycle status, consults the
//! `Ruleset` for every proposed action, and performs the commits the
//! engine deliberately leaves alone: moving pawns, standing walls,
//! decrementing wall budgets, recording history, and declaring winners.

pub mod game;

pub use game::{GameSession, SessionError};
