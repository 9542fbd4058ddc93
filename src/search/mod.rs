//! Computer opponent: memoized minimax search.
//!
//! ## Overview
//!
//! - **Exhaustive**: the board has at most nine plies, so every line is
//!   searched; memoization is the only pruning.
//! - **Memoized**: scores are keyed by (board, mover, depth) in a
//!   `TranspositionCache` shared across games and threads.
//! - **Varied**: equally scored moves are chosen between with a coin flip
//!   drawn from a seedable `GameRng`.
//!
//! ## Usage
//!
//! ```rust
//! use tictac_engine::core::{Board, GameRng};
//! use tictac_engine::search::{Minimax, ScoreCache};
//!
//! let board = Board::from_grid("XX--O----").unwrap();
//! let cache = ScoreCache::new();
//! let mut rng = GameRng::new(42);
//!
//! let outcome = Minimax::new(&cache, &mut rng).choose(&board, true).unwrap();
//! assert_eq!(outcome.index, 2);
//! ```

pub mod cache;
pub mod minimax;
pub mod stats;
pub mod task;

pub use cache::{CacheKey, NullCache, ScoreCache, TranspositionCache};
pub use minimax::{Minimax, SearchOutcome, WIN_SCORE};
pub use stats::SearchStats;
pub use task::SearchTask;
