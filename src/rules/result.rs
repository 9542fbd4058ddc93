//! Game results and winning lines.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Player, CELL_COUNT};

/// Outcome of the most recent evaluation.
///
/// `Continue` is the only non-terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Empty cells remain and nobody has three in a row.
    #[default]
    Continue,
    /// Board is full and nobody has three in a row.
    Tie,
    /// Player One completed a line.
    PlayerOneWins,
    /// Player Two completed a line.
    PlayerTwoWins,
}

impl GameResult {
    /// The result announcing a win for `player`.
    #[must_use]
    pub const fn win_for(player: Player) -> Self {
        match player {
            Player::One => GameResult::PlayerOneWins,
            Player::Two => GameResult::PlayerTwoWins,
        }
    }

    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Continue)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameResult::PlayerOneWins => Some(Player::One),
            GameResult::PlayerTwoWins => Some(Player::Two),
            GameResult::Continue | GameResult::Tie => None,
        }
    }

    /// Numeric result code (`0` continue, `1` tie, `2` one wins, `3` two wins).
    ///
    /// For collaborators that persist results as plain integers.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            GameResult::Continue => 0,
            GameResult::Tie => 1,
            GameResult::PlayerOneWins => 2,
            GameResult::PlayerTwoWins => 3,
        }
    }

    /// Inverse of `code`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(GameResult::Continue),
            1 => Some(GameResult::Tie),
            2 => Some(GameResult::PlayerOneWins),
            3 => Some(GameResult::PlayerTwoWins),
            _ => None,
        }
    }
}

/// The three cells that produced a win, in ascending index order.
///
/// Deserialization goes through `WinningLine::new`, so a decoded line is
/// always one of the eight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[usize; 3]", into = "[usize; 3]")]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// Every line on the board: rows, columns, then diagonals.
    pub const ALL: [WinningLine; 8] = [
        WinningLine([0, 1, 2]),
        WinningLine([3, 4, 5]),
        WinningLine([6, 7, 8]),
        WinningLine([0, 3, 6]),
        WinningLine([1, 4, 7]),
        WinningLine([2, 5, 8]),
        WinningLine::MAIN_DIAGONAL,
        WinningLine::ANTI_DIAGONAL,
    ];

    /// Top-left to bottom-right.
    pub const MAIN_DIAGONAL: WinningLine = WinningLine([0, 4, 8]);

    /// Top-right to bottom-left.
    pub const ANTI_DIAGONAL: WinningLine = WinningLine([2, 4, 6]);

    /// Create a line from three indices.
    ///
    /// Returns `None` unless the indices form one of the eight lines.
    #[must_use]
    pub fn new(mut indices: [usize; 3]) -> Option<Self> {
        indices.sort_unstable();
        if indices.iter().any(|&i| i >= CELL_COUNT) {
            return None;
        }
        let line = WinningLine(indices);
        Self::ALL.contains(&line).then_some(line)
    }

    /// Row containing `index`.
    pub(crate) const fn row_of(index: usize) -> Self {
        let start = index / 3 * 3;
        WinningLine([start, start + 1, start + 2])
    }

    /// Column containing `index`.
    pub(crate) const fn column_of(index: usize) -> Self {
        let col = index % 3;
        WinningLine([col, col + 3, col + 6])
    }

    /// The three indices.
    #[must_use]
    pub const fn indices(&self) -> [usize; 3] {
        self.0
    }

    /// Whether `index` is part of this line.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl TryFrom<[usize; 3]> for WinningLine {
    type Error = EngineError;

    fn try_from(indices: [usize; 3]) -> Result<Self, Self::Error> {
        WinningLine::new(indices).ok_or(EngineError::InvalidLine { indices })
    }
}

impl From<WinningLine> for [usize; 3] {
    fn from(line: WinningLine) -> Self {
        line.0
    }
}
