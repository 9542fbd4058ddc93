//! Exhaustive minimax with a transposition cache.
//!
//! Scores are from the computer's (`Player::Two`) point of view:
//!
//! - computer wins at depth `d`: `10 - d` (faster wins score higher)
//! - human wins at depth `d`: `d - 10` (slower losses score higher)
//! - full board with no winner: `0`
//!
//! The computer maximizes, the modeled human minimizes. When a child scores
//! exactly as well as the current best, a fair coin decides whether it
//! replaces it, so play varies between equally good moves while staying
//! optimal in value.
//!
//! The board is mutated in place and every hypothetical mark is cleared
//! after its subtree returns. Callers get their buffer back unchanged.

use std::time::Instant;

use tracing::debug;

use crate::core::{Board, GameRng, Player, CELL_COUNT};
use crate::rules::{evaluate, GameResult};

use super::cache::{CacheKey, TranspositionCache};
use super::stats::SearchStats;

/// Base score for a win; each ply of depth costs one point.
pub const WIN_SCORE: i32 = 10;

/// The move chosen by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Board index to play.
    pub index: usize,
    /// Minimax value of the move, `None` for the random opening.
    pub score: Option<i32>,
    /// Counters for the search that produced this move.
    pub stats: SearchStats,
}

/// Minimax searcher borrowing a cache and a random source.
pub struct Minimax<'a> {
    cache: &'a dyn TranspositionCache,
    rng: &'a mut GameRng,
    stats: SearchStats,
}

impl<'a> Minimax<'a> {
    /// Create a searcher.
    pub fn new(cache: &'a dyn TranspositionCache, rng: &'a mut GameRng) -> Self {
        Self {
            cache,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Choose the computer's next move on `board`.
    ///
    /// With `opening_shortcut` set, an empty board gets a uniformly random
    /// cell instead of a full search. Returns `None` if the board is full.
    pub fn choose(&mut self, board: &Board, opening_shortcut: bool) -> Option<SearchOutcome> {
        if board.is_full() {
            return None;
        }

        let start = Instant::now();
        self.stats.reset();

        if opening_shortcut && board.is_empty() {
            let index = self.rng.gen_range_usize(0..CELL_COUNT);
            debug!(index, "random opening");
            return Some(SearchOutcome {
                index,
                score: None,
                stats: std::mem::take(&mut self.stats),
            });
        }

        let mut scratch = *board;
        let (index, score) = self.best_move(&mut scratch, Player::COMPUTER)?;
        debug_assert_eq!(&scratch, board, "search must undo every move");

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            index,
            score,
            nodes = self.stats.nodes_visited,
            cache_hits = self.stats.cache_hits,
            "minimax search complete"
        );

        Some(SearchOutcome {
            index,
            score: Some(score),
            stats: std::mem::take(&mut self.stats),
        })
    }

    /// Best move for `mover` at the root, searched in place on `board`.
    ///
    /// The root is always expanded, never answered from the cache, so a
    /// move is chosen even when the root position was searched before.
    /// Returns `(index, score)`, or `None` if the board is full.
    pub fn best_move(&mut self, board: &mut Board, mover: Player) -> Option<(usize, i32)> {
        self.stats.nodes_visited += 1;
        let (score, index) = self.expand(board, 0, mover);
        index.map(|i| (i, score))
    }

    /// Minimax value of a node.
    ///
    /// `last_index` is the move that produced this node, `None` at the
    /// root. A cache hit returns immediately.
    pub fn score(
        &mut self,
        board: &mut Board,
        depth: u8,
        mover: Player,
        last_index: Option<usize>,
    ) -> i32 {
        self.stats.nodes_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let key = CacheKey::new(board, mover, depth);
        if let Some(score) = self.cache.lookup(&key) {
            self.stats.cache_hits += 1;
            return score;
        }

        if depth > 0 {
            if let Some(index) = last_index {
                match evaluate(board, index).result {
                    GameResult::PlayerTwoWins => return WIN_SCORE - i32::from(depth),
                    GameResult::PlayerOneWins => return i32::from(depth) - WIN_SCORE,
                    GameResult::Tie => return 0,
                    GameResult::Continue => {}
                }
            }
        }

        self.expand(board, depth, mover).0
    }

    /// Try every empty cell for `mover` and keep the best child.
    fn expand(&mut self, board: &mut Board, depth: u8, mover: Player) -> (i32, Option<usize>) {
        let available = board.available();
        if available.is_empty() {
            return (0, None);
        }

        let maximizing = mover == Player::COMPUTER;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_index = None;

        for index in available {
            board.place(index, mover);
            let score = self.score(board, depth + 1, mover.opponent(), Some(index));
            board.clear(index);

            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves || (score == best_score && self.rng.coin()) {
                best_score = score;
                best_index = Some(index);
            }
        }

        self.cache.insert(CacheKey::new(board, mover, depth), best_score);
        self.stats.cache_inserts += 1;

        (best_score, best_index)
    }

    /// Counters accumulated since the last `choose`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
