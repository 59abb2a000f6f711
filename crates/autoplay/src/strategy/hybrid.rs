use super::{
    bottom_chip_indices, rank_groups, suit_groups, top_chip_indices, FlushStrategy,
    FullHouseStrategy, Strategy, StraightFlushStrategy, StraightStrategy,
};
use drawsim_core::{Card, Game, Suit, STRAIGHT_WINDOWS};

const PLAY_THRESHOLD: f64 = 0.3;
const DISCARD_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Flush,
    Straight,
    FullHouse,
    StraightFlush,
}

/// Sizes up the hand with cheap counting heuristics, then hands control to
/// whichever pattern strategy looks most promising. Below the thresholds it
/// falls back to raw chip value.
#[derive(Default)]
pub struct HybridStrategy {
    flush: FlushStrategy,
    straight: StraightStrategy,
    full_house: FullHouseStrategy,
    straight_flush: StraightFlushStrategy,
}

impl HybridStrategy {
    fn delegate_play(&mut self, target: Target, game: &Game) -> Vec<usize> {
        match target {
            Target::Flush => self.flush.select_play_cards(game),
            Target::Straight => self.straight.select_play_cards(game),
            Target::FullHouse => self.full_house.select_play_cards(game),
            Target::StraightFlush => self.straight_flush.select_play_cards(game),
        }
    }

    fn delegate_discard(&mut self, target: Target, game: &Game) -> Vec<usize> {
        match target {
            Target::Flush => self.flush.select_discard_cards(game),
            Target::Straight => self.straight.select_discard_cards(game),
            Target::FullHouse => self.full_house.select_discard_cards(game),
            Target::StraightFlush => self.straight_flush.select_discard_cards(game),
        }
    }
}

impl Strategy for HybridStrategy {
    fn name(&self) -> &'static str {
        "Hybrid"
    }

    fn select_play_cards(&mut self, game: &Game) -> Vec<usize> {
        let hand = game.hand();
        if hand.is_empty() {
            return Vec::new();
        }
        let (target, potential) = best_target(hand);
        if potential > PLAY_THRESHOLD {
            return self.delegate_play(target, game);
        }
        top_chip_indices(hand, hand.len().min(5))
    }

    fn select_discard_cards(&mut self, game: &Game) -> Vec<usize> {
        let hand = game.hand();
        if hand.is_empty() {
            return Vec::new();
        }
        let (target, potential) = best_target(hand);
        if potential > DISCARD_THRESHOLD {
            return self.delegate_discard(target, game);
        }
        bottom_chip_indices(hand, hand.len().min(3))
    }
}

/// The category with the strongest 0..1 potential; ties resolve in the
/// listed order.
fn best_target(hand: &[Card]) -> (Target, f64) {
    let candidates = [
        (Target::Flush, flush_potential(hand)),
        (Target::Straight, straight_potential(hand)),
        (Target::FullHouse, full_house_potential(hand)),
        (Target::StraightFlush, straight_flush_potential(hand)),
    ];
    let mut best = candidates[0];
    for &candidate in &candidates[1..] {
        if candidate.1 > best.1 {
            best = candidate;
        }
    }
    best
}

fn flush_potential(hand: &[Card]) -> f64 {
    let longest = suit_groups(hand)
        .iter()
        .map(|group| group.len())
        .max()
        .unwrap_or(0);
    (longest as f64 / 5.0).min(1.0)
}

fn straight_potential(hand: &[Card]) -> f64 {
    let groups = rank_groups(hand);
    let mut best = 0usize;
    for window in STRAIGHT_WINDOWS {
        let held = window
            .iter()
            .filter(|&&value| !groups[value as usize - 1].is_empty())
            .count();
        best = best.max(held);
    }
    best as f64 / 5.0
}

fn full_house_potential(hand: &[Card]) -> f64 {
    let mut counts: Vec<usize> = rank_groups(hand)
        .iter()
        .map(|group| group.len())
        .filter(|&count| count > 0)
        .collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let triple_part = counts.first().copied().unwrap_or(0).min(3);
    let pair_part = counts.get(1).copied().unwrap_or(0).min(2);
    (triple_part + pair_part) as f64 / 5.0
}

fn straight_flush_potential(hand: &[Card]) -> f64 {
    let mut best = 0usize;
    for suit in Suit::ALL {
        let mut present = [false; 13];
        for card in hand {
            if card.suit == suit {
                present[card.rank.value() as usize - 1] = true;
            }
        }
        for window in STRAIGHT_WINDOWS {
            let held = window
                .iter()
                .filter(|&&value| present[value as usize - 1])
                .count();
            best = best.max(held);
        }
    }
    best as f64 / 5.0
}
