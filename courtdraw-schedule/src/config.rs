//! Configuration types for draws and group stages
//!
//! Level 4 - Utilities and configuration

use serde::{Deserialize, Serialize};

use crate::deadlines::WeightTable;

/// Default number of players per round-robin group
pub const DEFAULT_GROUP_SIZE: usize = 4;

/// How a date range is divided between rounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStrategy {
    /// Same number of days for every round
    Linear,
    /// Fixed per-round weights that favor early rounds
    #[default]
    Progressive,
    /// Weights follow match counts, scaled up for later rounds
    Balanced,
}

/// Single-elimination draw configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Random seed for the draw (None = fresh entropy, reported back)
    pub seed: Option<u64>,
    /// Deadline distribution across rounds
    pub deadline_strategy: DeadlineStrategy,
    /// Weights for the progressive strategy
    pub weight_table: WeightTable,
}

impl DrawConfig {
    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set deadline strategy
    pub fn with_strategy(mut self, strategy: DeadlineStrategy) -> Self {
        self.deadline_strategy = strategy;
        self
    }

    /// Set custom progressive weights
    pub fn with_weight_table(mut self, table: WeightTable) -> Self {
        self.weight_table = table;
        self
    }
}

/// Round-robin group stage configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Random seed for grouping (None = fresh entropy, reported back)
    pub seed: Option<u64>,
    /// Players per group; the last group may be smaller
    pub group_size: usize,
    /// Rounds to schedule per group (None = full round robin)
    pub rounds: Option<usize>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            seed: None,
            group_size: DEFAULT_GROUP_SIZE,
            rounds: None,
        }
    }
}

impl GroupConfig {
    /// Create config with the given group size
    pub fn new(group_size: usize) -> Self {
        Self {
            group_size,
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set players per group
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Limit the number of rounds per group
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = Some(rounds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_config_defaults() {
        let config = DrawConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.deadline_strategy, DeadlineStrategy::Progressive);
        assert_eq!(config.weight_table, WeightTable::standard());
    }

    #[test]
    fn test_draw_config_builders() {
        let config = DrawConfig::default()
            .with_seed(7)
            .with_strategy(DeadlineStrategy::Balanced);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.deadline_strategy, DeadlineStrategy::Balanced);
    }

    #[test]
    fn test_group_config_defaults() {
        let config = GroupConfig::default();
        assert_eq!(config.group_size, 4);
        assert_eq!(config.rounds, None);
    }

    #[test]
    fn test_group_config_builders() {
        let config = GroupConfig::new(5).with_seed(1).with_rounds(2);
        assert_eq!(config.group_size, 5);
        assert_eq!(config.clone().with_group_size(3).group_size, 3);
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.rounds, Some(2));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: DrawConfig = serde_json::from_str(r#"{"deadline_strategy": "linear"}"#).unwrap();
        assert_eq!(config.deadline_strategy, DeadlineStrategy::Linear);
        assert_eq!(config.weight_table, WeightTable::standard());

        let config: GroupConfig = serde_json::from_str(r#"{"seed": 3}"#).unwrap();
        assert_eq!(config.group_size, DEFAULT_GROUP_SIZE);
        assert_eq!(config.seed, Some(3));
    }
}
