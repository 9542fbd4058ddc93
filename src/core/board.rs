//! The 3x3 board.
//!
//! Cells are stored in row-major order, so `index = row * 3 + col`:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`. The search mutates one buffer in place and undoes each
//! hypothetical move, but callers can always take a scratch copy for free.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{EngineError, Result};
use super::player::{Cell, Player};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side length of the board.
pub const SIDE: usize = 3;

/// Indices of empty cells, in ascending order.
pub type AvailableMoves = SmallVec<[usize; CELL_COUNT]>;

/// Fixed-size tic-tac-toe board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Create a board from raw cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parse the compact text form, e.g. `"XO--X---O"`.
    ///
    /// Whitespace and `|` separators are ignored so the output of
    /// `Display` also parses.
    pub fn from_grid(grid: &str) -> Result<Self> {
        let invalid = || EngineError::InvalidGrid {
            grid: grid.to_string(),
        };

        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;
        for symbol in grid.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if count == CELL_COUNT {
                return Err(invalid());
            }
            cells[count] = Cell::from_symbol(symbol).ok_or_else(invalid)?;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(invalid());
        }
        Ok(Self { cells })
    }

    /// Compact text form, one symbol per cell.
    #[must_use]
    pub fn to_grid(&self) -> String {
        self.cells.iter().map(|c| c.symbol()).collect()
    }

    /// Get the cell at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Whether `index` is on the board and empty.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Mark `index` for `player`.
    ///
    /// Panics if `index` is out of range. Callers validate first.
    pub fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Marked(player);
    }

    /// Reset `index` to empty. The inverse of `place`.
    pub fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    /// Reset every cell to empty.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of the empty cells, ascending.
    #[must_use]
    pub fn available(&self) -> AvailableMoves {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of marked cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// True if no cell has been marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// True if every cell has been marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Pack the board into a base-3 integer (`< 3^9`).
    ///
    /// Distinct boards always pack to distinct values.
    #[must_use]
    pub fn packed(&self) -> u16 {
        let packed = self
            .cells
            .iter()
            .rev()
            .fold(0u32, |acc, cell| acc * 3 + cell.digit());
        // 3^9 - 1 = 19682 fits in u16
        packed as u16
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIDE {
            let start = row * SIDE;
            let line: Vec<String> = self.cells[start..start + SIDE]
                .iter()
                .map(|c| c.symbol().to_string())
                .collect();
            write!(f, "{}", line.join("|"))?;
            if row + 1 < SIDE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
