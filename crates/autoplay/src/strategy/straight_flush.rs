use super::flush::discard_toward_dominant_suit;
use super::{best_scoring_subset, Strategy};
use drawsim_core::{chips_for_value, Card, Game, Suit, STRAIGHT_WINDOWS};

/// Chases five suited cards in a row. A made straight flush is played on
/// sight; failing that the hand is pushed toward its dominant suit.
#[derive(Default)]
pub struct StraightFlushStrategy;

impl Strategy for StraightFlushStrategy {
    fn name(&self) -> &'static str {
        "Straight Flush"
    }

    fn select_play_cards(&mut self, game: &Game) -> Vec<usize> {
        let hand = game.hand();
        if hand.is_empty() {
            return Vec::new();
        }

        if let Some(indices) = best_suited_window(hand) {
            return indices;
        }

        if game.discards_left() == 0 && game.plays_left() > 1 {
            self.select_discard_cards(game)
        } else {
            best_scoring_subset(hand)
        }
    }

    fn select_discard_cards(&mut self, game: &Game) -> Vec<usize> {
        discard_toward_dominant_suit(game)
    }
}

/// Indices of the highest-chip straight window held entirely in one suit.
fn best_suited_window(hand: &[Card]) -> Option<Vec<usize>> {
    let mut best: Option<(i64, Vec<usize>)> = None;
    for suit in Suit::ALL {
        let mut by_value: [Option<usize>; 13] = [None; 13];
        let mut count = 0;
        for (idx, card) in hand.iter().enumerate() {
            if card.suit == suit {
                count += 1;
                let slot = &mut by_value[card.rank.value() as usize - 1];
                if slot.is_none() {
                    *slot = Some(idx);
                }
            }
        }
        if count < 5 {
            continue;
        }
        for window in STRAIGHT_WINDOWS {
            let mut indices = Vec::with_capacity(5);
            for &value in &window {
                match by_value[value as usize - 1] {
                    Some(idx) => indices.push(idx),
                    None => break,
                }
            }
            if indices.len() < 5 {
                continue;
            }
            let sum: i64 = window.iter().map(|&value| chips_for_value(value)).sum();
            if best.as_ref().map(|(chips, _)| sum > *chips).unwrap_or(true) {
                indices.sort_unstable();
                best = Some((sum, indices));
            }
        }
    }
    best.map(|(_, indices)| indices)
}
