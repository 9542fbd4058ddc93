//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Who moves first in a new game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstMover {
    /// Flip a fair coin at game start and on every restart.
    #[default]
    Random,
    /// Always start with the given player.
    Fixed(Player),
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the engine RNG.
    /// Same seed (and same moves) produces the same computer play.
    pub seed: u64,

    /// First-mover policy applied at start and on restart.
    pub first_mover: FirstMover,

    /// Pick a uniformly random cell when the computer opens on an empty
    /// board instead of running a full-depth search.
    pub opening_shortcut: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            first_mover: FirstMover::Random,
            opening_shortcut: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom first-mover policy.
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Create a new config with the empty-board shortcut toggled.
    pub fn with_opening_shortcut(mut self, enabled: bool) -> Self {
        self.opening_shortcut = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.first_mover, FirstMover::Random);
        assert!(config.opening_shortcut);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_seed(123)
            .with_first_mover(FirstMover::Fixed(Player::Two))
            .with_opening_shortcut(false);

        assert_eq!(config.seed, 123);
        assert_eq!(config.first_mover, FirstMover::Fixed(Player::Two));
        assert!(!config.opening_shortcut);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
