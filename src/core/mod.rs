//! Core engine types: players, cells, board, RNG, configuration, errors.
//!
//! Everything here is rules-agnostic. Win detection lives in `rules`, the
//! computer opponent in `search`.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use board::{AvailableMoves, Board, CELL_COUNT, SIDE};
pub use config::{EngineConfig, FirstMover};
pub use error::{EngineError, MoveRejection, Result};
pub use player::{Cell, Player};
pub use rng::{GameRng, GameRngState};
