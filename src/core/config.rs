//! Engine and game loop configuration.

use serde::{Deserialize, Serialize};

/// Settings for building the exhaustive move table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Seed for the sampling RNG. Same seed, same table.
    pub seed: u64,

    /// Upper bound on sampled candidates per state.
    /// Construction fails if a state needs more.
    pub max_samples: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_samples: 1_000,
        }
    }
}

impl TableConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_samples(mut self, max_samples: u32) -> Self {
        self.max_samples = max_samples;
        self
    }
}

/// Settings for the game loop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Stop with `GameError::TurnLimit` after this many turns (`None` = never).
    ///
    /// Two table engines can cycle forever, so automated games should set it.
    pub max_turns: Option<u32>,
}

impl GameConfig {
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_samples, 1_000);
        assert_eq!(GameConfig::default().max_turns, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TableConfig::default().with_seed(7).with_max_samples(50);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_samples, 50);

        assert_eq!(GameConfig::default().with_max_turns(10).max_turns, Some(10));
    }

    #[test]
    fn test_serialization() {
        let config = TableConfig::default().with_seed(123);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
