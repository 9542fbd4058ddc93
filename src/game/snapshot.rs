//! Save and restore of a game in progress.
//!
//! The snapshot holds what a collaborator needs to rebuild the game: board,
//! player to move, over flag, result, winning line, and the RNG position so
//! the computer's random choices replay. The cache is not part of it. Any
//! serde format works; `to_bytes` and `from_bytes` use bincode.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameRngState, Player, Result};
use crate::rules::{GameResult, WinningLine};

/// Serializable engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Board contents.
    pub board: Board,
    /// Player to move.
    pub current_player: Player,
    /// Whether the game has ended.
    pub is_over: bool,
    /// Result of the last evaluated move.
    pub result: GameResult,
    /// The completed line, if the game was won.
    pub winning_line: Option<WinningLine>,
    /// Position of the engine's random stream.
    pub rng: GameRngState,
}

impl EngineSnapshot {
    /// Encode as bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
