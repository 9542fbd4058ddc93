//! # tictac-engine
//!
//! A tic-tac-toe game engine with a minimax computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Win detection is a side-effect-free function of the
//!    board and the last move. Real play and the search share it.
//!
//! 2. **Injected Collaborators**: The random source and the score cache are
//!    constructor parameters, so computer play is reproducible in tests and
//!    the cache can be shared across games and threads.
//!
//! 3. **Fail Fast**: Out-of-range, occupied, and after-game-over moves are
//!    rejected with `EngineError::InvalidMove`, never silently ignored.
//!
//! ## Architecture
//!
//! - **Exhaustive Minimax**: At most nine plies, so the search visits every
//!   line; a transposition cache keyed by (board, mover, depth) is the only
//!   pruning.
//!
//! - **Randomized Tie-Breaking**: Equally scored moves are chosen between by
//!   coin flip. The computer varies its play but never plays a worse move.
//!
//! ## Modules
//!
//! - `core`: Players, cells, board, RNG, configuration, errors
//! - `rules`: Terminal evaluation, results, winning lines
//! - `search`: Transposition cache and minimax search
//! - `game`: The `GameEngine` façade and snapshots
//!
//! ## Example
//!
//! ```rust
//! use tictac_engine::{EngineConfig, FirstMover, GameEngine, GameResult, Player, ScoreCache};
//!
//! let config = EngineConfig::default()
//!     .with_seed(7)
//!     .with_first_mover(FirstMover::Fixed(Player::One));
//! let mut engine = GameEngine::with_cache(config, ScoreCache::shared());
//!
//! engine.make_move(4).unwrap();
//! let reply = engine.compute_computer_move().unwrap();
//! engine.make_move(reply).unwrap();
//!
//! assert_eq!(engine.board().marked_count(), 2);
//! assert_eq!(engine.result(), GameResult::Continue);
//! ```

pub mod core;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, EngineConfig, EngineError, FirstMover, GameRng, GameRngState, MoveRejection,
    Player, Result,
};

pub use crate::rules::{evaluate, Evaluation, GameResult, WinningLine};

pub use crate::search::{
    CacheKey, Minimax, NullCache, ScoreCache, SearchOutcome, SearchStats, SearchTask,
    TranspositionCache,
};

pub use crate::game::{EngineSnapshot, GameEngine, GameOverObserver, MoveOutcome};
