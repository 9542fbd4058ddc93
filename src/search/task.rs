//! Detached searches for running off the caller's thread.

use std::sync::Arc;

use crate::core::{Board, GameRng};

use super::cache::TranspositionCache;
use super::minimax::{Minimax, SearchOutcome};

/// A self-contained computer-move search.
///
/// Holds a copy of the board, a handle to the shared cache, and its own
/// forked RNG, so it is `Send` and can run on any thread. It never touches
/// the engine it came from; apply the result with
/// `GameEngine::apply_search_outcome`.
pub struct SearchTask {
    board: Board,
    cache: Arc<dyn TranspositionCache>,
    rng: GameRng,
    opening_shortcut: bool,
}

impl SearchTask {
    pub(crate) fn new(
        board: Board,
        cache: Arc<dyn TranspositionCache>,
        rng: GameRng,
        opening_shortcut: bool,
    ) -> Self {
        Self {
            board,
            cache,
            rng,
            opening_shortcut,
        }
    }

    /// The board this task searches.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the search to completion.
    ///
    /// Returns `None` only if the board is full.
    pub fn run(mut self) -> Option<SearchOutcome> {
        Minimax::new(self.cache.as_ref(), &mut self.rng).choose(&self.board, self.opening_shortcut)
    }
}

impl std::fmt::Debug for SearchTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchTask")
            .field("board", &self.board.to_grid())
            .field("cached_scores", &self.cache.len())
            .field("opening_shortcut", &self.opening_shortcut)
            .finish()
    }
}
