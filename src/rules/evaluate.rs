//! Terminal evaluation from the perspective of the last move.
//!
//! Only the lines through the just-played cell can have been completed by
//! that move, so only those are checked: its row, its column, and the
//! diagonals it lies on. The center lies on both diagonals, corners on one,
//! edges on none.
//!
//! Evaluation is pure. It is shared by real play and by the search, and
//! neither writes through it.

use crate::core::{Board, Cell};

use super::result::{GameResult, WinningLine};

/// Result of evaluating a board after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Terminal state, or `Continue`.
    pub result: GameResult,
    /// The completed line, present only on a win.
    pub line: Option<WinningLine>,
}

impl Evaluation {
    const fn no_line(result: GameResult) -> Self {
        Self { result, line: None }
    }
}

/// Diagonals passing through `index`.
fn diagonals_through(index: usize) -> &'static [WinningLine] {
    match index {
        4 => &[WinningLine::MAIN_DIAGONAL, WinningLine::ANTI_DIAGONAL],
        0 | 8 => &[WinningLine::MAIN_DIAGONAL],
        2 | 6 => &[WinningLine::ANTI_DIAGONAL],
        _ => &[],
    }
}

/// Evaluate `board` after a mark was placed at `last_index`.
///
/// The mover is whoever owns `last_index`. If that cell is empty or out of
/// range, no line can have been completed and only the fill state matters.
#[must_use]
pub fn evaluate(board: &Board, last_index: usize) -> Evaluation {
    let Some(Cell::Marked(mover)) = board.get(last_index) else {
        return Evaluation::no_line(fill_state(board));
    };

    let completes = |line: &WinningLine| {
        line.indices()
            .iter()
            .all(|&i| board.get(i) == Some(Cell::Marked(mover)))
    };

    let row = WinningLine::row_of(last_index);
    let column = WinningLine::column_of(last_index);

    let line = std::iter::once(row)
        .chain(std::iter::once(column))
        .chain(diagonals_through(last_index).iter().copied())
        .find(completes);

    match line {
        Some(line) => Evaluation {
            result: GameResult::win_for(mover),
            line: Some(line),
        },
        None => Evaluation::no_line(fill_state(board)),
    }
}

/// `Continue` while any cell is empty, `Tie` once the board is full.
fn fill_state(board: &Board) -> GameResult {
    if board.is_full() {
        GameResult::Tie
    } else {
        GameResult::Continue
    }
}
