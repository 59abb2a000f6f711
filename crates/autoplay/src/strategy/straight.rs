use super::{best_scoring_subset, rank_groups, Combinations, Strategy};
use drawsim_core::{chips_for_value, straight_probability, Game, STRAIGHT_WINDOWS};

/// Chases five-in-a-row. Plays a made straight immediately; otherwise asks
/// the deck-composition probabilities which hold keeps the best window open.
#[derive(Default)]
pub struct StraightStrategy;

impl Strategy for StraightStrategy {
    fn name(&self) -> &'static str {
        "Straight"
    }

    fn select_play_cards(&mut self, game: &Game) -> Vec<usize> {
        let hand = game.hand();
        if hand.is_empty() {
            return Vec::new();
        }
        let groups = rank_groups(hand);
        let distinct = groups.iter().filter(|group| !group.is_empty()).count();
        if distinct < 5 {
            if game.discards_left() == 0 && game.plays_left() > 1 {
                return self.select_discard_cards(game);
            }
            return best_scoring_subset(hand);
        }

        if let Some(window) = best_held_window(&groups) {
            let mut indices: Vec<usize> = window
                .iter()
                .map(|&value| groups[value as usize - 1][0])
                .collect();
            indices.sort_unstable();
            return indices;
        }

        if game.discards_left() == 0 && game.plays_left() > 1 {
            self.select_discard_cards(game)
        } else {
            best_scoring_subset(hand)
        }
    }

    fn select_discard_cards(&mut self, game: &Game) -> Vec<usize> {
        let hand = game.hand();
        if hand.is_empty() {
            return Vec::new();
        }
        let deck_counts = game.deck().rank_counts();

        // Enumerate hold/discard splits for 4- and 5-card discards and keep
        // the hold with the best completion odds. Smaller discards never win
        // under the window model, so the search stays at O(C(8,4)) splits.
        let mut best_probability = 0.0f64;
        let mut best_hold: Option<Vec<usize>> = None;
        for discard_count in 4..=5usize {
            if discard_count > hand.len() {
                break;
            }
            let hold_size = hand.len() - discard_count;
            for hold in Combinations::new(hand.len(), hold_size) {
                let held: Vec<u8> = hold.iter().map(|&idx| hand[idx].rank.value()).collect();
                let probability = straight_probability(&held, &deck_counts, discard_count);
                if probability > best_probability {
                    best_probability = probability;
                    best_hold = Some(hold);
                }
            }
        }

        match best_hold {
            Some(hold) => (0..hand.len()).filter(|idx| !hold.contains(idx)).collect(),
            None => best_scoring_subset(hand),
        }
    }
}

/// The fully-held straight window with the highest chip sum, if any.
fn best_held_window(groups: &[Vec<usize>; 13]) -> Option<[u8; 5]> {
    let mut best: Option<(i64, [u8; 5])> = None;
    for window in STRAIGHT_WINDOWS {
        if window
            .iter()
            .any(|&value| groups[value as usize - 1].is_empty())
        {
            continue;
        }
        let sum: i64 = window.iter().map(|&value| chips_for_value(value)).sum();
        if best.map(|(chips, _)| sum > chips).unwrap_or(true) {
            best = Some((sum, window));
        }
    }
    best.map(|(_, window)| window)
}
