use crate::{summarize, AutoplayError, BatchConfig, GameRecord, StrategySummary};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything a batch run produced: the raw records plus the reduced
/// per-strategy summaries, ready for external plotting or aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub config: BatchConfig,
    pub summaries: Vec<StrategySummary>,
    pub records: Vec<GameRecord>,
}

impl BatchReport {
    pub fn new(config: BatchConfig, records: Vec<GameRecord>) -> Self {
        let summaries = summarize(&records);
        Self {
            config,
            summaries,
            records,
        }
    }

    pub fn to_text_report(&self) -> String {
        let last_seed = self.config.start_seed + self.config.games.saturating_sub(1) as u64;
        let mut lines = vec![
            format!(
                "games per strategy: {} (seeds {}..={})",
                self.config.games, self.config.start_seed, last_seed
            ),
            format!(
                "target score: {} with {} plays / {} discards",
                self.config.game.target_score, self.config.game.plays, self.config.game.discards
            ),
            String::new(),
        ];
        for summary in &self.summaries {
            lines.push(format!("{}:", summary.strategy));
            lines.push(format!(
                "  win rate: {:.1}% ({}/{})",
                summary.win_rate() * 100.0,
                summary.wins,
                summary.games
            ));
            lines.push(format!(
                "  score: avg {:.1} min {} max {}",
                summary.average_score(),
                summary.score_min,
                summary.score_max
            ));
            match summary.average_plays_to_win() {
                Some(average) => lines.push(format!("  plays to win: avg {average:.2}")),
                None => lines.push("  plays to win: (no wins)".to_string()),
            }
        }
        lines.join("\n")
    }
}

pub fn write_json(path: &Path, report: &BatchReport) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}
