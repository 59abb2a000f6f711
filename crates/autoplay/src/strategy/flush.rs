use super::{best_scoring_subset, suit_groups, Strategy};
use drawsim_core::{flush_probability, Game};

/// Chases five of one suit. Plays a made flush immediately; otherwise works
/// the hand toward the most promising suit.
#[derive(Default)]
pub struct FlushStrategy;

impl Strategy for FlushStrategy {
    fn name(&self) -> &'static str {
        "Flush"
    }

    fn select_play_cards(&mut self, game: &Game) -> Vec<usize> {
        let hand = game.hand();
        if hand.is_empty() {
            return Vec::new();
        }
        let groups = suit_groups(hand);
        let mut best_suit = 0;
        for suit in 1..4 {
            if groups[suit].len() > groups[best_suit].len() {
                best_suit = suit;
            }
        }
        let has_flush = groups[best_suit].len() >= 5;

        // Out of discards with no flush made yet: spend a play as a discard
        // to keep churning, as long as a final play remains.
        if game.discards_left() == 0 && game.plays_left() > 1 && !has_flush {
            return self.select_discard_cards(game);
        }

        if has_flush {
            let mut suited = groups[best_suit].clone();
            suited.sort_by(|&a, &b| hand[b].chips().cmp(&hand[a].chips()));
            suited.truncate(5);
            suited.sort_unstable();
            return suited;
        }

        best_scoring_subset(hand)
    }

    fn select_discard_cards(&mut self, game: &Game) -> Vec<usize> {
        discard_toward_dominant_suit(game)
    }
}

/// Picks the suit to commit to, then discards the lowest-chip cards outside
/// it (at most five). The suit with the most cards in hand wins; ties break
/// toward the suit with the best completion odds in the remaining deck, and
/// a top suit that can no longer reach five cards is passed over for the
/// runner-up.
pub(crate) fn discard_toward_dominant_suit(game: &Game) -> Vec<usize> {
    let hand = game.hand();
    if hand.is_empty() {
        return Vec::new();
    }
    let groups = suit_groups(hand);
    let deck_suits = game.deck().suit_counts();

    let mut order: Vec<usize> = (0..4).filter(|&suit| !groups[suit].is_empty()).collect();
    order.sort_by(|&a, &b| groups[b].len().cmp(&groups[a].len()));
    let top_count = groups[order[0]].len();
    let tied: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&suit| groups[suit].len() == top_count)
        .collect();

    let keep = if tied.len() > 1 {
        // A full discard's worth of draws decides which tied suit is the
        // most completable.
        let deck_size = game.deck().remaining();
        let mut best = tied[0];
        let mut best_odds = flush_probability(top_count, deck_suits[best], deck_size, 5);
        for &suit in &tied[1..] {
            let odds = flush_probability(top_count, deck_suits[suit], deck_size, 5);
            if odds > best_odds {
                best = suit;
                best_odds = odds;
            }
        }
        best
    } else if deck_suits[order[0]] as usize + top_count >= 5 || order.len() < 2 {
        order[0]
    } else {
        order[1]
    };

    let mut discard: Vec<usize> = (0..hand.len())
        .filter(|&idx| hand[idx].suit.index() != keep)
        .collect();
    discard.sort_by(|&a, &b| hand[a].chips().cmp(&hand[b].chips()));
    discard.truncate(5);
    discard.sort_unstable();
    discard
}
