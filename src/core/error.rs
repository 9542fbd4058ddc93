//! Engine error types.

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// Position is not in `0..9`.
    OutOfRange,
    /// The cell already holds a mark.
    Occupied,
    /// The game has already reached a terminal state.
    GameOver,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::OutOfRange => write!(f, "position out of range"),
            MoveRejection::Occupied => write!(f, "cell is occupied"),
            MoveRejection::GameOver => write!(f, "game is over"),
        }
    }
}

/// Errors raised by the engine.
///
/// Play fails with `InvalidMove`, or with `NoMovesAvailable` when a search is
/// asked for on a full board. The remaining variants come from the
/// save/restore path.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A move was attempted that the rules do not allow.
    ///
    /// Searches on a finished game report `GameOver` with `position` 0,
    /// since no move was attempted.
    #[error("Invalid move at {position}: {reason}")]
    InvalidMove {
        position: usize,
        reason: MoveRejection,
    },

    /// A text grid could not be parsed into a board.
    #[error("Invalid grid {grid:?}: expected 9 cells of 'X', 'O' or '-'")]
    InvalidGrid { grid: String },

    /// Three indices that do not form a row, column, or diagonal.
    #[error("Invalid winning line {indices:?}")]
    InvalidLine { indices: [usize; 3] },

    /// A search was requested on a full board that is not marked over.
    #[error("No moves available: the board is full")]
    NoMovesAvailable,

    /// A binary snapshot could not be encoded or decoded.
    #[error("Snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl EngineError {
    pub(crate) fn invalid_move(position: usize, reason: MoveRejection) -> Self {
        EngineError::InvalidMove { position, reason }
    }

    /// The rejection reason, if this is an `InvalidMove`.
    #[must_use]
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            EngineError::InvalidMove { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
