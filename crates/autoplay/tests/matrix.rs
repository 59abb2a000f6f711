use drawsim_autoplay::{run_single, GameDriver, Strategy, StrategyKind};
use drawsim_core::{Game, GameConfig, GameStatus};

macro_rules! determinism_case {
    ($name:ident, $kind:expr, $seed:expr) => {
        #[test]
        fn $name() {
            let config = GameConfig::default();
            let first = run_single($kind, &config, $seed);
            let second = run_single($kind, &config, $seed);
            assert_eq!(first, second);
        }
    };
}

determinism_case!(determinism_random_1, StrategyKind::Random, 1);
determinism_case!(determinism_random_77, StrategyKind::Random, 77);
determinism_case!(determinism_flush_1, StrategyKind::Flush, 1);
determinism_case!(determinism_flush_77, StrategyKind::Flush, 77);
determinism_case!(determinism_straight_1, StrategyKind::Straight, 1);
determinism_case!(determinism_straight_77, StrategyKind::Straight, 77);
determinism_case!(determinism_full_house_1, StrategyKind::FullHouse, 1);
determinism_case!(determinism_full_house_77, StrategyKind::FullHouse, 77);
determinism_case!(determinism_straight_flush_1, StrategyKind::StraightFlush, 1);
determinism_case!(
    determinism_straight_flush_77,
    StrategyKind::StraightFlush,
    77
);
determinism_case!(determinism_hybrid_1, StrategyKind::Hybrid, 1);
determinism_case!(determinism_hybrid_77, StrategyKind::Hybrid, 77);

fn assert_decision_valid(indices: &[usize], hand_len: usize) {
    assert!(indices.len() <= 5, "oversized decision {indices:?}");
    let mut seen = vec![false; hand_len];
    for &idx in indices {
        assert!(idx < hand_len, "index {idx} out of bounds for {hand_len}");
        assert!(!seen[idx], "duplicate index {idx} in {indices:?}");
        seen[idx] = true;
    }
}

macro_rules! decision_bounds_case {
    ($name:ident, $kind:expr) => {
        #[test]
        fn $name() {
            for seed in 1..=25u64 {
                let game = Game::new(GameConfig::default(), seed);
                let mut strategy = $kind.build(seed);
                let plays = strategy.select_play_cards(&game);
                assert_decision_valid(&plays, game.hand().len());
                let discards = strategy.select_discard_cards(&game);
                assert_decision_valid(&discards, game.hand().len());
            }
        }
    };
}

decision_bounds_case!(bounds_random, StrategyKind::Random);
decision_bounds_case!(bounds_flush, StrategyKind::Flush);
decision_bounds_case!(bounds_straight, StrategyKind::Straight);
decision_bounds_case!(bounds_full_house, StrategyKind::FullHouse);
decision_bounds_case!(bounds_straight_flush, StrategyKind::StraightFlush);
decision_bounds_case!(bounds_hybrid, StrategyKind::Hybrid);

macro_rules! terminal_case {
    ($name:ident, $kind:expr) => {
        #[test]
        fn $name() {
            for seed in 1..=10u64 {
                let mut driver = GameDriver::new(GameConfig::default(), $kind, seed);
                let outcome = driver.run_to_completion();
                assert_ne!(driver.game().status(), GameStatus::InProgress);
                assert_eq!(outcome.won, driver.game().status() == GameStatus::Won);
                assert_eq!(driver.game().cards_accounted(), 52);
            }
        }
    };
}

terminal_case!(terminal_random, StrategyKind::Random);
terminal_case!(terminal_flush, StrategyKind::Flush);
terminal_case!(terminal_straight, StrategyKind::Straight);
terminal_case!(terminal_full_house, StrategyKind::FullHouse);
terminal_case!(terminal_straight_flush, StrategyKind::StraightFlush);
terminal_case!(terminal_hybrid, StrategyKind::Hybrid);

#[test]
fn strategy_ids_round_trip() {
    for kind in StrategyKind::ALL {
        assert_eq!(StrategyKind::from_id(kind.id()), Some(kind));
    }
    assert_eq!(StrategyKind::from_id("royal"), None);
}
