use anyhow::{bail, Context, Result};
use drawsim_autoplay::{
    run_batch, write_json, BatchConfig, BatchReport, GameDriver, StrategyKind,
};
use drawsim_core::{format_hand, Event, GameConfig, GameStatus};
use std::path::PathBuf;

#[derive(Debug)]
struct CliOptions {
    games: u32,
    start_seed: u64,
    target: i64,
    strategies: Vec<StrategyKind>,
    json: Option<PathBuf>,
    demo: Option<StrategyKind>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            games: 1000,
            start_seed: 1,
            target: 600,
            strategies: Vec::new(),
            json: None,
            demo: None,
        }
    }
}

const USAGE: &str = "\
usage: drawsim [options]
  --games N         games per strategy (default 1000)
  --seed N          first seed (default 1)
  --target N        target score (default 600)
  --strategy ID     run only this strategy; repeatable
  --json PATH       also write the full report as JSON
  --demo ID         play one game with this strategy, narrating each turn
  --help            show this help

strategy ids: random flush straight full_house straight_flush hybrid";

fn parse_args() -> Result<Option<CliOptions>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut options = CliOptions::default();
    let mut index = 0;
    while index < args.len() {
        let flag = args[index].as_str();
        match flag {
            "--help" | "-h" => return Ok(None),
            "--games" => options.games = next_value(&args, &mut index, flag)?,
            "--seed" => options.start_seed = next_value(&args, &mut index, flag)?,
            "--target" => options.target = next_value(&args, &mut index, flag)?,
            "--strategy" => {
                let id: String = next_value(&args, &mut index, flag)?;
                options.strategies.push(parse_strategy(&id)?);
            }
            "--json" => {
                let path: String = next_value(&args, &mut index, flag)?;
                options.json = Some(PathBuf::from(path));
            }
            "--demo" => {
                let id: String = next_value(&args, &mut index, flag)?;
                options.demo = Some(parse_strategy(&id)?);
            }
            other => bail!("unknown option {other}\n{USAGE}"),
        }
        index += 1;
    }
    if options.strategies.is_empty() {
        options.strategies = StrategyKind::ALL.to_vec();
    }
    Ok(Some(options))
}

fn next_value<T: std::str::FromStr>(args: &[String], index: &mut usize, flag: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    *index += 1;
    let raw = args
        .get(*index)
        .with_context(|| format!("{flag} needs a value"))?;
    raw.parse()
        .with_context(|| format!("bad value {raw:?} for {flag}"))
}

fn parse_strategy(id: &str) -> Result<StrategyKind> {
    StrategyKind::from_id(id).with_context(|| format!("unknown strategy {id:?}\n{USAGE}"))
}

fn game_config(options: &CliOptions) -> GameConfig {
    GameConfig {
        target_score: options.target,
        ..GameConfig::default()
    }
}

fn main() -> Result<()> {
    let Some(options) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    if let Some(kind) = options.demo {
        return run_demo(kind, &options);
    }

    let config = BatchConfig {
        games: options.games,
        start_seed: options.start_seed,
        strategies: options.strategies.clone(),
        game: game_config(&options),
    };
    let records = run_batch(&config);
    let report = BatchReport::new(config, records);
    println!("{}", report.to_text_report());
    if let Some(path) = &options.json {
        write_json(path, &report)?;
        println!("\nwrote {}", path.display());
    }
    Ok(())
}

fn run_demo(kind: StrategyKind, options: &CliOptions) -> Result<()> {
    let mut driver = GameDriver::new(game_config(options), kind, options.start_seed);
    println!(
        "{} strategy, seed {}, target {}",
        driver.strategy_name(),
        options.start_seed,
        options.target
    );
    println!("hand: {}", format_hand(driver.game().hand()));

    let mut turn = 0;
    while driver.step() {
        turn += 1;
        println!("\nturn {turn}");
        let lines: Vec<String> = driver.events_mut().drain().map(describe_event).collect();
        for line in lines {
            println!("  {line}");
        }
        println!("  hand: {}", format_hand(driver.game().hand()));
    }

    let game = driver.game();
    println!(
        "\nfinal: score {} / {} -> {}",
        game.score(),
        game.config().target_score,
        match game.status() {
            GameStatus::Won => "won",
            GameStatus::Exhausted => "exhausted",
            GameStatus::InProgress => "stalled",
        }
    );
    for (index, record) in game.history().iter().enumerate() {
        println!(
            "  play {}: {} [{}] for {}",
            index + 1,
            record.kind.label(),
            format_hand(&record.cards),
            record.score
        );
    }
    Ok(())
}

fn describe_event(event: Event) -> String {
    match event {
        Event::HandDealt { count } => format!("drew {count} card(s)"),
        Event::HandPlayed { kind, score, total } => {
            format!("played {} for {score} (total {total})", kind.label())
        }
        Event::CardsDiscarded { count } => format!("discarded {count} card(s)"),
        Event::GameWon { score, plays_used } => {
            format!("target reached at {score} after {plays_used} play(s)")
        }
        Event::GameExhausted { score } => format!("out of moves at {score}"),
    }
}
