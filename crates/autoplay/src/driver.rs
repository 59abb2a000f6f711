use crate::{Strategy, StrategyKind};
use drawsim_core::{
    evaluate, EventBus, Game, GameConfig, GameError, GameStatus, PlayRecord,
};
use serde::{Deserialize, Serialize};

/// Final result of one driven game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameOutcome {
    pub final_score: i64,
    pub won: bool,
    pub hands_played: u8,
}

/// Owns one game plus the strategy steering it. Front ends can also drive
/// the game by hand through the `play`/`discard` pass-throughs.
pub struct GameDriver {
    game: Game,
    strategy: Box<dyn Strategy>,
    events: EventBus,
}

impl GameDriver {
    pub fn new(config: GameConfig, kind: StrategyKind, seed: u64) -> Self {
        Self::with_strategy(config, kind.build(seed), seed)
    }

    pub fn with_strategy(config: GameConfig, strategy: Box<dyn Strategy>, seed: u64) -> Self {
        Self {
            game: Game::new(config, seed),
            strategy,
            events: EventBus::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    pub fn play(&mut self, indices: &[usize]) -> Result<PlayRecord, GameError> {
        self.game.play(indices, &mut self.events)
    }

    pub fn discard(&mut self, indices: &[usize]) -> Result<(), GameError> {
        self.game.discard(indices, &mut self.events)
    }

    /// One driving-loop turn: pick discard or play, apply it. Returns false
    /// when nothing succeeded, which is the stalemate signal.
    pub fn step(&mut self) -> bool {
        if self.game.status() != GameStatus::InProgress {
            return false;
        }

        let play_indices = if self.game.plays_left() > 0 {
            self.strategy.select_play_cards(&self.game)
        } else {
            Vec::new()
        };
        let play_value = selection_score(&self.game, &play_indices);

        if self.should_discard(play_value) {
            let discard_indices = self.strategy.select_discard_cards(&self.game);
            if !discard_indices.is_empty()
                && self.game.discard(&discard_indices, &mut self.events).is_ok()
            {
                return true;
            }
        }

        if !play_indices.is_empty() && self.game.play(&play_indices, &mut self.events).is_ok() {
            return true;
        }

        // The play fell through; a leftover discard still makes progress.
        if self.game.discards_left() > 0 {
            let discard_indices = self.strategy.select_discard_cards(&self.game);
            if !discard_indices.is_empty()
                && self.game.discard(&discard_indices, &mut self.events).is_ok()
            {
                return true;
            }
        }

        false
    }

    fn should_discard(&self, play_value: i64) -> bool {
        if self.game.discards_left() == 0 {
            return false;
        }
        let target = self.game.config().target_score;
        let score = self.game.score();
        // Close to the finish with a decent play lined up: cash it in.
        if score * 10 >= target * 8 && play_value >= 50 {
            return false;
        }
        if play_value < 50 && self.game.deck().remaining() >= 3 {
            return true;
        }
        score * 10 < target * 7 && self.game.plays_left() <= 2
    }

    /// Drives the game to a terminal state. The loop is bounded by the play
    /// and discard budgets; a stalled iteration abandons the game instead of
    /// spinning.
    pub fn run_to_completion(&mut self) -> GameOutcome {
        let budget = self.game.config().plays as u32 + self.game.config().discards as u32;
        for _ in 0..budget {
            if !self.step() {
                break;
            }
        }
        if self.game.status() == GameStatus::InProgress {
            self.game.abandon(&mut self.events);
        }
        GameOutcome {
            final_score: self.game.score(),
            won: self.game.status() == GameStatus::Won,
            hands_played: self.game.history().len() as u8,
        }
    }
}

/// Score the selection would earn right now; malformed selections count as
/// no play at all.
fn selection_score(game: &Game, indices: &[usize]) -> i64 {
    let hand = game.hand();
    if indices.is_empty() || indices.iter().any(|&idx| idx >= hand.len()) {
        return 0;
    }
    let cards: Vec<_> = indices.iter().map(|&idx| hand[idx]).collect();
    evaluate(&cards).1
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PassStrategy;

    impl Strategy for PassStrategy {
        fn name(&self) -> &'static str {
            "Pass"
        }

        fn select_play_cards(&mut self, _game: &Game) -> Vec<usize> {
            Vec::new()
        }

        fn select_discard_cards(&mut self, _game: &Game) -> Vec<usize> {
            Vec::new()
        }
    }

    #[test]
    fn stalemate_guard_ends_the_game() {
        let mut driver =
            GameDriver::with_strategy(GameConfig::default(), Box::new(PassStrategy), 5);
        let outcome = driver.run_to_completion();
        assert!(!outcome.won);
        assert_eq!(outcome.hands_played, 0);
        assert_eq!(driver.game().status(), GameStatus::Exhausted);
    }

    #[test]
    fn driver_terminates_within_budget() {
        for kind in StrategyKind::ALL {
            let mut driver = GameDriver::new(GameConfig::default(), kind, 42);
            let outcome = driver.run_to_completion();
            assert_ne!(driver.game().status(), GameStatus::InProgress);
            assert!(outcome.hands_played <= driver.game().config().plays);
        }
    }
}
