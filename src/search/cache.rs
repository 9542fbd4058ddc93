//! Transposition cache for minimax scores.
//!
//! Keys carry the full board, the mover, and the search depth, so an entry
//! can never go stale: nothing is ever evicted or invalidated, and the cache
//! is safe to share across games and threads for the life of the process.
//! The reachable state space is a few hundred thousand keys at most.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::core::{Board, Player};

/// Cache key: (board contents, player to move, depth).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    board: u16,
    mover: Player,
    depth: u8,
}

impl CacheKey {
    /// Build the key for a search node.
    #[must_use]
    pub fn new(board: &Board, mover: Player, depth: u8) -> Self {
        Self {
            board: board.packed(),
            mover,
            depth,
        }
    }

    /// Depth component of the key.
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Mover component of the key.
    #[must_use]
    pub fn mover(&self) -> Player {
        self.mover
    }
}

/// Thread-safe key to score store.
///
/// The search both reads and writes through this from whatever thread runs
/// it, so implementations must tolerate concurrent access.
pub trait TranspositionCache: Send + Sync {
    /// Look up a previously stored score.
    fn lookup(&self, key: &CacheKey) -> Option<i32>;

    /// Store a fully evaluated score.
    fn insert(&self, key: CacheKey, score: i32);

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// True if nothing has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared cache behind a read-write lock.
#[derive(Debug, Default)]
pub struct ScoreCache {
    entries: RwLock<FxHashMap<CacheKey, i32>>,
}

static PROCESS_CACHE: Lazy<Arc<ScoreCache>> = Lazy::new(|| Arc::new(ScoreCache::new()));

impl ScoreCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache ready to share.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// The process-wide cache used by engines built without an explicit one.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&PROCESS_CACHE)
    }
}

impl TranspositionCache for ScoreCache {
    fn lookup(&self, key: &CacheKey) -> Option<i32> {
        self.entries.read().get(key).copied()
    }

    fn insert(&self, key: CacheKey, score: i32) {
        self.entries.write().insert(key, score);
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

/// A cache that never stores anything.
///
/// Forces a full search every time. Useful as a baseline for checking that
/// memoization does not change results.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCache;

impl TranspositionCache for NullCache {
    fn lookup(&self, _key: &CacheKey) -> Option<i32> {
        None
    }

    fn insert(&self, _key: CacheKey, _score: i32) {}

    fn len(&self) -> usize {
        0
    }
}
