use crate::StrategyKind;
use drawsim_core::GameConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Games per strategy; every strategy sees the same seed sequence.
    pub games: u32,
    pub start_seed: u64,
    pub strategies: Vec<StrategyKind>,
    pub game: GameConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            start_seed: 1,
            strategies: StrategyKind::ALL.to_vec(),
            game: GameConfig::default(),
        }
    }
}
