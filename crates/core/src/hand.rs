use crate::{Card, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
}

impl HandKind {
    /// Ascending strength order.
    pub const ALL: [HandKind; 9] = [
        HandKind::HighCard,
        HandKind::Pair,
        HandKind::TwoPair,
        HandKind::Trips,
        HandKind::Straight,
        HandKind::Flush,
        HandKind::FullHouse,
        HandKind::Quads,
        HandKind::StraightFlush,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandKind::HighCard => "high_card",
            HandKind::Pair => "pair",
            HandKind::TwoPair => "two_pair",
            HandKind::Trips => "trips",
            HandKind::Straight => "straight",
            HandKind::Flush => "flush",
            HandKind::FullHouse => "full_house",
            HandKind::Quads => "quads",
            HandKind::StraightFlush => "straight_flush",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::Trips => "Triple",
            HandKind::Straight => "Straight",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::Quads => "Four of a Kind",
            HandKind::StraightFlush => "Straight Flush",
        }
    }
}

/// The ten 5-rank runs that count as straights, as `Rank::value()` numbers.
/// The first is the wheel (Ace low), the last the ace-high run.
pub const STRAIGHT_WINDOWS: [[u8; 5]; 10] = [
    [1, 2, 3, 4, 5],
    [2, 3, 4, 5, 6],
    [3, 4, 5, 6, 7],
    [4, 5, 6, 7, 8],
    [5, 6, 7, 8, 9],
    [6, 7, 8, 9, 10],
    [7, 8, 9, 10, 11],
    [8, 9, 10, 11, 12],
    [9, 10, 11, 12, 13],
    [10, 11, 12, 13, 1],
];

pub fn chips_for_value(value: u8) -> i64 {
    Rank::from_value(value).map(Rank::chips).unwrap_or(0)
}

/// Scores `cards` against every category and returns the best one. Ties go
/// to the stronger category; a hand that forms nothing is a High Card hand.
pub fn evaluate(cards: &[Card]) -> (HandKind, i64) {
    if cards.is_empty() {
        return (HandKind::HighCard, 0);
    }
    let mut best = (HandKind::HighCard, category_score(cards, HandKind::HighCard));
    for kind in HandKind::ALL {
        let score = category_score(cards, kind);
        if score > 0 && score >= best.1 {
            best = (kind, score);
        }
    }
    best
}

/// Score of `cards` read as one fixed category; 0 when the category cannot
/// be formed. Pure in its input, no category shares state with another.
pub fn category_score(cards: &[Card], kind: HandKind) -> i64 {
    match kind {
        HandKind::HighCard => score_high_card(cards),
        HandKind::Pair => score_pair(cards),
        HandKind::TwoPair => score_two_pair(cards),
        HandKind::Trips => score_trips(cards),
        HandKind::Straight => score_straight(cards),
        HandKind::Flush => score_flush(cards),
        HandKind::FullHouse => score_full_house(cards),
        HandKind::Quads => score_quads(cards),
        HandKind::StraightFlush => score_straight_flush(cards),
    }
}

fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.rank.value() as usize - 1] += 1;
    }
    counts
}

/// Highest chip value among ranks held at least `min_count` times,
/// optionally excluding one rank value.
fn best_group_chips(counts: &[u8; 13], min_count: u8, exclude: Option<u8>) -> Option<i64> {
    let mut best = None;
    for value in 1..=13u8 {
        if exclude == Some(value) || counts[value as usize - 1] < min_count {
            continue;
        }
        let chips = chips_for_value(value);
        if best.map(|b| chips > b).unwrap_or(true) {
            best = Some(chips);
        }
    }
    best
}

fn score_high_card(cards: &[Card]) -> i64 {
    cards
        .iter()
        .map(|card| (5 + card.chips()) * 1)
        .max()
        .unwrap_or(0)
}

fn score_pair(cards: &[Card]) -> i64 {
    let counts = rank_counts(cards);
    match best_group_chips(&counts, 2, None) {
        Some(chips) => (10 + 2 * chips) * 2,
        None => 0,
    }
}

fn score_two_pair(cards: &[Card]) -> i64 {
    let counts = rank_counts(cards);
    let mut pair_chips: Vec<i64> = (1..=13u8)
        .filter(|&value| counts[value as usize - 1] >= 2)
        .map(chips_for_value)
        .collect();
    if pair_chips.len() < 2 {
        return 0;
    }
    pair_chips.sort_unstable_by(|a, b| b.cmp(a));
    (20 + 2 * pair_chips[0] + 2 * pair_chips[1]) * 2
}

fn score_trips(cards: &[Card]) -> i64 {
    let counts = rank_counts(cards);
    match best_group_chips(&counts, 3, None) {
        Some(chips) => (30 + 3 * chips) * 3,
        None => 0,
    }
}

fn score_straight(cards: &[Card]) -> i64 {
    let counts = rank_counts(cards);
    match best_window_chips(&counts, &STRAIGHT_WINDOWS) {
        Some(sum) => (30 + sum) * 4,
        None => 0,
    }
}

fn score_flush(cards: &[Card]) -> i64 {
    let mut best = 0;
    for suit in crate::Suit::ALL {
        let mut chips: Vec<i64> = cards
            .iter()
            .filter(|card| card.suit == suit)
            .map(|card| card.chips())
            .collect();
        if chips.len() < 5 {
            continue;
        }
        chips.sort_unstable_by(|a, b| b.cmp(a));
        let top: i64 = chips.iter().take(5).sum();
        best = best.max((35 + top) * 4);
    }
    best
}

fn score_full_house(cards: &[Card]) -> i64 {
    let counts = rank_counts(cards);
    let mut triple: Option<(u8, i64)> = None;
    for value in 1..=13u8 {
        if counts[value as usize - 1] < 3 {
            continue;
        }
        let chips = chips_for_value(value);
        if triple.map(|(_, best)| chips > best).unwrap_or(true) {
            triple = Some((value, chips));
        }
    }
    let Some((triple_value, triple_chips)) = triple else {
        return 0;
    };
    match best_group_chips(&counts, 2, Some(triple_value)) {
        Some(pair_chips) => (40 + 3 * triple_chips + 2 * pair_chips) * 4,
        None => 0,
    }
}

fn score_quads(cards: &[Card]) -> i64 {
    let counts = rank_counts(cards);
    match best_group_chips(&counts, 4, None) {
        Some(chips) => (60 + 4 * chips) * 7,
        None => 0,
    }
}

fn score_straight_flush(cards: &[Card]) -> i64 {
    let mut best = 0;
    for suit in crate::Suit::ALL {
        let suited: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|card| card.suit == suit)
            .collect();
        if suited.len() < 5 {
            continue;
        }
        let counts = rank_counts(&suited);
        if let Some(sum) = best_window_chips(&counts, &STRAIGHT_WINDOWS) {
            best = best.max((100 + sum) * 8);
        }
    }
    best
}

/// Chip sum of the best fully-held window, if any. Windows overlap, so the
/// max is taken rather than the first hit.
fn best_window_chips(counts: &[u8; 13], windows: &[[u8; 5]]) -> Option<i64> {
    let mut best = None;
    for window in windows {
        if window
            .iter()
            .any(|&value| counts[value as usize - 1] == 0)
        {
            continue;
        }
        let sum: i64 = window.iter().map(|&value| chips_for_value(value)).sum();
        if best.map(|b| sum > b).unwrap_or(true) {
            best = Some(sum);
        }
    }
    best
}
