use super::Strategy;
use drawsim_core::{Game, RngState};

/// Baseline strategy: a uniformly random subset of 1..=5 cards for either
/// action. Exists to give the pattern strategies something to beat.
pub struct RandomStrategy {
    rng: RngState,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RngState::from_seed(seed),
        }
    }

    fn random_subset(&mut self, hand_len: usize) -> Vec<usize> {
        if hand_len == 0 {
            return Vec::new();
        }
        let bound = hand_len.min(5) as u64;
        let count = 1 + (self.rng.next_u64() % bound) as usize;
        let mut indices: Vec<usize> = (0..hand_len).collect();
        self.rng.shuffle(&mut indices);
        indices.truncate(count);
        indices.sort_unstable();
        indices
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn select_play_cards(&mut self, game: &Game) -> Vec<usize> {
        self.random_subset(game.hand().len())
    }

    fn select_discard_cards(&mut self, game: &Game) -> Vec<usize> {
        self.random_subset(game.hand().len())
    }
}
