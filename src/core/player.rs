//! Players and board cells.
//!
//! ## Player
//!
//! Two-valued player identifier. `Player::One` is the human by convention
//! and plays `X`; `Player::Two` is the computer and plays `O`.
//!
//! ## Cell
//!
//! A single board square: empty, or marked by one of the players.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player, marks with `X`.
    One,
    /// The computer player, marks with `O`.
    Two,
}

impl Player {
    /// The player modeled as the human.
    pub const HUMAN: Player = Player::One;

    /// The player driven by the minimax search.
    pub const COMPUTER: Player = Player::Two;

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The character this player marks the board with.
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    /// Parse a player from its mark character.
    #[must_use]
    pub const fn from_mark(mark: char) -> Option<Self> {
        match mark {
            'X' => Some(Player::One),
            'O' => Some(Player::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player One ({})", self.mark()),
            Player::Two => write!(f, "Player Two ({})", self.mark()),
        }
    }
}

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by a player.
    Marked(Player),
}

impl Cell {
    /// Text symbol used by the compact grid form: `X`, `O`, or `-`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Marked(player) => player.mark(),
        }
    }

    /// Parse a cell from its grid symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Cell::Empty),
            other => match Player::from_mark(other) {
                Some(player) => Some(Cell::Marked(player)),
                None => None,
            },
        }
    }

    /// Whether the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player who marked this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Base-3 digit used when packing a board into a cache key.
    #[must_use]
    pub(crate) const fn digit(self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::Marked(Player::One) => 1,
            Cell::Marked(Player::Two) => 2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Marked(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn test_human_and_computer_roles() {
        assert_eq!(Player::HUMAN, Player::One);
        assert_eq!(Player::COMPUTER, Player::Two);
    }

    #[test]
    fn test_marks_round_trip() {
        for player in [Player::One, Player::Two] {
            assert_eq!(Player::from_mark(player.mark()), Some(player));
        }
        assert_eq!(Player::from_mark('-'), None);
        assert_eq!(Player::from_mark('x'), None);
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), '-');
        assert_eq!(Cell::Marked(Player::One).symbol(), 'X');
        assert_eq!(Cell::Marked(Player::Two).symbol(), 'O');

        assert_eq!(Cell::from_symbol('-'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('O'), Some(Cell::Marked(Player::Two)));
        assert_eq!(Cell::from_symbol('?'), None);
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::from(Player::One).owner(), Some(Player::One));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::One), "Player One (X)");
        assert_eq!(format!("{}", Player::Two), "Player Two (O)");
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Cell::Marked(Player::Two)).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Cell::Marked(Player::Two));
    }
}
