use drawsim_core::{evaluate, Card, Game};
use serde::{Deserialize, Serialize};

mod flush;
mod full_house;
mod hybrid;
mod random;
mod straight;
mod straight_flush;

pub use flush::FlushStrategy;
pub use full_house::FullHouseStrategy;
pub use hybrid::HybridStrategy;
pub use random::RandomStrategy;
pub use straight::StraightStrategy;
pub use straight_flush::StraightFlushStrategy;

/// A decision-maker. Both methods return hand indices; an empty vector means
/// "no action this call" and the driving loop moves on or gives up.
pub trait Strategy: Send {
    fn name(&self) -> &'static str;
    fn select_play_cards(&mut self, game: &Game) -> Vec<usize>;
    fn select_discard_cards(&mut self, game: &Game) -> Vec<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Random,
    Flush,
    Straight,
    FullHouse,
    StraightFlush,
    Hybrid,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::Random,
        StrategyKind::Flush,
        StrategyKind::Straight,
        StrategyKind::FullHouse,
        StrategyKind::StraightFlush,
        StrategyKind::Hybrid,
    ];

    pub fn id(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Flush => "flush",
            StrategyKind::Straight => "straight",
            StrategyKind::FullHouse => "full_house",
            StrategyKind::StraightFlush => "straight_flush",
            StrategyKind::Hybrid => "hybrid",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::Random => "Random",
            StrategyKind::Flush => "Flush",
            StrategyKind::Straight => "Straight",
            StrategyKind::FullHouse => "Full House",
            StrategyKind::StraightFlush => "Straight Flush",
            StrategyKind::Hybrid => "Hybrid",
        }
    }

    pub fn from_id(id: &str) -> Option<StrategyKind> {
        StrategyKind::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Builds the strategy. `seed` only matters for the random variant; the
    /// pattern strategies are pure functions of the game they look at.
    pub fn build(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(seed)),
            StrategyKind::Flush => Box::new(FlushStrategy),
            StrategyKind::Straight => Box::new(StraightStrategy),
            StrategyKind::FullHouse => Box::new(FullHouseStrategy),
            StrategyKind::StraightFlush => Box::new(StraightFlushStrategy),
            StrategyKind::Hybrid => Box::new(HybridStrategy::default()),
        }
    }
}

/// Hand indices grouped by suit, indexed by `Suit::index()`.
pub(crate) fn suit_groups(hand: &[Card]) -> [Vec<usize>; 4] {
    let mut groups: [Vec<usize>; 4] = std::array::from_fn(|_| Vec::new());
    for (idx, card) in hand.iter().enumerate() {
        groups[card.suit.index()].push(idx);
    }
    groups
}

/// Hand indices grouped by rank value, indexed by `Rank::value() - 1`.
pub(crate) fn rank_groups(hand: &[Card]) -> [Vec<usize>; 13] {
    let mut groups: [Vec<usize>; 13] = std::array::from_fn(|_| Vec::new());
    for (idx, card) in hand.iter().enumerate() {
        groups[card.rank.value() as usize - 1].push(idx);
    }
    groups
}

/// Lexicographic k-subsets of `0..n`, iterative so the worst case stays a
/// flat loop instead of a call tree.
pub(crate) struct Combinations {
    n: usize,
    k: usize,
    current: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub(crate) fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            current: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        let mut pos = self.k;
        loop {
            if pos == 0 {
                self.done = true;
                break;
            }
            pos -= 1;
            if self.current[pos] != pos + self.n - self.k {
                self.current[pos] += 1;
                for next in pos + 1..self.k {
                    self.current[next] = self.current[next - 1] + 1;
                }
                break;
            }
        }
        Some(item)
    }
}

/// The shared exhaustive fallback: every 5-card subset (or the whole hand
/// when it is smaller), scored by the evaluator, best one wins.
pub(crate) fn best_scoring_subset(hand: &[Card]) -> Vec<usize> {
    let size = hand.len().min(5);
    if size == 0 {
        return Vec::new();
    }
    let mut best_indices = Vec::new();
    let mut best_score = -1i64;
    for combo in Combinations::new(hand.len(), size) {
        let cards: Vec<Card> = combo.iter().map(|&idx| hand[idx]).collect();
        let (_, score) = evaluate(&cards);
        if score > best_score {
            best_score = score;
            best_indices = combo;
        }
    }
    best_indices
}

/// Indices of the `count` highest-chip cards, in hand order.
pub(crate) fn top_chip_indices(hand: &[Card], count: usize) -> Vec<usize> {
    let mut by_chips: Vec<usize> = (0..hand.len()).collect();
    by_chips.sort_by(|&a, &b| hand[b].chips().cmp(&hand[a].chips()));
    by_chips.truncate(count);
    by_chips.sort_unstable();
    by_chips
}

/// Indices of the `count` lowest-chip cards, in hand order.
pub(crate) fn bottom_chip_indices(hand: &[Card], count: usize) -> Vec<usize> {
    let mut by_chips: Vec<usize> = (0..hand.len()).collect();
    by_chips.sort_by(|&a, &b| hand[a].chips().cmp(&hand[b].chips()));
    by_chips.truncate(count);
    by_chips.sort_unstable();
    by_chips
}

/// Trims an oversized discard to the five lowest-chip members so it stays
/// within the per-action card limit.
pub(crate) fn cap_discard(hand: &[Card], mut indices: Vec<usize>) -> Vec<usize> {
    if indices.len() > 5 {
        indices.sort_by(|&a, &b| hand[a].chips().cmp(&hand[b].chips()));
        indices.truncate(5);
    }
    indices.sort_unstable();
    indices
}
