use serde::{Deserialize, Serialize};

/// Per-game rules. The win threshold is part of the config rather than a
/// process-wide constant so callers can sweep it in batch runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    pub target_score: i64,
    pub plays: u8,
    pub discards: u8,
    pub hand_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: 600,
            plays: 4,
            discards: 4,
            hand_size: 8,
        }
    }
}
