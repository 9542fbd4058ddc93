//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, including cache hits.
    pub nodes_visited: u64,

    /// Nodes answered from the transposition cache.
    pub cache_hits: u64,

    /// Scores written to the transposition cache.
    pub cache_inserts: u64,

    /// Deepest ply reached.
    pub max_depth: u8,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction of visited nodes answered from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.nodes_visited == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.nodes_visited as f64
        }
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
