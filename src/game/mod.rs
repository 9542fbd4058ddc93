//! The collaborator-facing game engine.
//!
//! `GameEngine` owns one game at a time. A UI layer drives it with
//! `make_move`, asks it for the computer's reply, and restarts it between
//! games. `EngineSnapshot` carries a game in progress across save/restore.

mod engine;
mod snapshot;

pub use engine::{GameEngine, GameOverObserver, MoveOutcome};
pub use snapshot::EngineSnapshot;
