use crate::{BatchConfig, GameDriver, StrategyKind};
use drawsim_core::GameConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One row of batch output, consumed by external reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub strategy: String,
    pub seed: u64,
    pub final_score: i64,
    pub won: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays_to_complete: Option<u8>,
}

pub fn run_single(kind: StrategyKind, config: &GameConfig, seed: u64) -> GameRecord {
    let mut driver = GameDriver::new(*config, kind, seed);
    let outcome = driver.run_to_completion();
    GameRecord {
        strategy: kind.label().to_string(),
        seed,
        final_score: outcome.final_score,
        won: outcome.won,
        plays_to_complete: outcome.won.then_some(outcome.hands_played),
    }
}

/// Runs every (seed, strategy) pair across the rayon pool. Games share no
/// state and carry their own seed, so the output is identical for any
/// worker count or schedule.
pub fn run_batch(config: &BatchConfig) -> Vec<GameRecord> {
    let jobs: Vec<(StrategyKind, u64)> = (0..config.games)
        .map(|offset| config.start_seed + offset as u64)
        .flat_map(|seed| config.strategies.iter().map(move |&kind| (kind, seed)))
        .collect();
    jobs.into_par_iter()
        .map(|(kind, seed)| run_single(kind, &config.game, seed))
        .collect()
}

/// Accumulated per-strategy statistics. Only sums, counts and extrema are
/// stored, so absorbing records commutes and merging associates; parallel
/// reduction order never shows up in the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrategySummary {
    pub strategy: String,
    pub games: u32,
    pub wins: u32,
    pub score_sum: i64,
    pub score_min: i64,
    pub score_max: i64,
    pub plays_to_win_sum: u64,
}

impl StrategySummary {
    fn empty(strategy: &str) -> Self {
        Self {
            strategy: strategy.to_string(),
            games: 0,
            wins: 0,
            score_sum: 0,
            score_min: i64::MAX,
            score_max: i64::MIN,
            plays_to_win_sum: 0,
        }
    }

    fn absorb(&mut self, record: &GameRecord) {
        self.games += 1;
        self.score_sum += record.final_score;
        self.score_min = self.score_min.min(record.final_score);
        self.score_max = self.score_max.max(record.final_score);
        if record.won {
            self.wins += 1;
        }
        if let Some(plays) = record.plays_to_complete {
            self.plays_to_win_sum += plays as u64;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.games += other.games;
        self.wins += other.wins;
        self.score_sum += other.score_sum;
        self.score_min = self.score_min.min(other.score_min);
        self.score_max = self.score_max.max(other.score_max);
        self.plays_to_win_sum += other.plays_to_win_sum;
        self
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    pub fn average_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.score_sum as f64 / self.games as f64
        }
    }

    pub fn average_plays_to_win(&self) -> Option<f64> {
        if self.wins == 0 {
            None
        } else {
            Some(self.plays_to_win_sum as f64 / self.wins as f64)
        }
    }
}

/// Folds records into one summary per strategy, in first-seen order.
pub fn summarize(records: &[GameRecord]) -> Vec<StrategySummary> {
    let mut order: Vec<&str> = Vec::new();
    for record in records {
        if !order.contains(&record.strategy.as_str()) {
            order.push(&record.strategy);
        }
    }
    order
        .into_iter()
        .map(|name| {
            records
                .par_iter()
                .filter(|record| record.strategy == name)
                .fold(
                    || StrategySummary::empty(name),
                    |mut summary, record| {
                        summary.absorb(record);
                        summary
                    },
                )
                .reduce(|| StrategySummary::empty(name), StrategySummary::merge)
        })
        .collect()
}
