use super::{best_scoring_subset, cap_discard, rank_groups, Strategy};
use drawsim_core::Game;

/// Chases rank multiples: quads when they show up, then triple+pair, then
/// whatever multiple is on the table. Discards keep the ranks that are both
/// multiplied in hand and still abundant in the deck.
#[derive(Default)]
pub struct FullHouseStrategy;

impl Strategy for FullHouseStrategy {
    fn name(&self) -> &'static str {
        "Full House"
    }

    fn select_play_cards(&mut self, game: &Game) -> Vec<usize> {
        let hand = game.hand();
        if hand.is_empty() {
            return Vec::new();
        }
        let groups = rank_groups(hand);

        for value in (1..=13u8).rev() {
            let group = &groups[value as usize - 1];
            if group.len() >= 4 {
                return group[..4].to_vec();
            }
        }

        let triple = highest_with_count(&groups, 3, None);
        let pair = triple.and_then(|t| highest_with_count(&groups, 2, Some(t)));
        let has_full_house = triple.is_some() && pair.is_some();

        if game.discards_left() == 0 && game.plays_left() > 1 && !has_full_house {
            return self.select_discard_cards(game);
        }

        if let (Some(triple), Some(pair)) = (triple, pair) {
            let mut indices = groups[triple as usize - 1][..3].to_vec();
            indices.extend_from_slice(&groups[pair as usize - 1][..2]);
            indices.sort_unstable();
            return indices;
        }
        if let Some(triple) = triple {
            return groups[triple as usize - 1][..3].to_vec();
        }
        if let Some(pair) = highest_with_count(&groups, 2, None) {
            return groups[pair as usize - 1][..2].to_vec();
        }

        best_scoring_subset(hand)
    }

    fn select_discard_cards(&mut self, game: &Game) -> Vec<usize> {
        let hand = game.hand();
        if hand.is_empty() {
            return Vec::new();
        }
        let groups = rank_groups(hand);
        let deck_counts = game.deck().rank_counts();

        let triple = highest_with_count(&groups, 3, None);
        let pairs: Vec<u8> = (1..=13u8)
            .filter(|&value| Some(value) != triple && groups[value as usize - 1].len() >= 2)
            .collect();

        let keep: Vec<u8> = if let Some(triple) = triple {
            // Triple made: keep it plus the leftover rank the deck is most
            // likely to pair up.
            let others: Vec<u8> = (1..=13u8)
                .filter(|&value| value != triple && !groups[value as usize - 1].is_empty())
                .collect();
            if others.is_empty() {
                return Vec::new();
            }
            let partner = best_by_deck_count(&others, &deck_counts);
            vec![triple, partner]
        } else if pairs.len() >= 2 {
            let mut ranked = pairs.clone();
            ranked.sort_by(|&a, &b| deck_key(b, &deck_counts).cmp(&deck_key(a, &deck_counts)));
            ranked[..2].to_vec()
        } else if pairs.len() == 1 {
            let pair = pairs[0];
            let others: Vec<u8> = (1..=13u8)
                .filter(|&value| value != pair && !groups[value as usize - 1].is_empty())
                .collect();
            let mut keep = vec![pair];
            if !others.is_empty() {
                keep.push(best_by_deck_count(&others, &deck_counts));
            }
            keep
        } else {
            let present: Vec<u8> = (1..=13u8)
                .filter(|&value| !groups[value as usize - 1].is_empty())
                .collect();
            let mut ranked = present;
            ranked.sort_by(|&a, &b| deck_key(b, &deck_counts).cmp(&deck_key(a, &deck_counts)));
            ranked.truncate(2);
            ranked
        };

        let discard: Vec<usize> = (0..hand.len())
            .filter(|&idx| !keep.contains(&hand[idx].rank.value()))
            .collect();
        cap_discard(hand, discard)
    }
}

/// Highest rank value held at least `count` times, skipping `exclude`.
fn highest_with_count(groups: &[Vec<usize>; 13], count: usize, exclude: Option<u8>) -> Option<u8> {
    (1..=13u8)
        .rev()
        .find(|&value| Some(value) != exclude && groups[value as usize - 1].len() >= count)
}

/// Sort key preferring ranks with more copies left, then higher rank.
fn deck_key(value: u8, deck_counts: &[u8; 13]) -> (u8, u8) {
    (deck_counts[value as usize - 1], value)
}

fn best_by_deck_count(values: &[u8], deck_counts: &[u8; 13]) -> u8 {
    let mut best = values[0];
    for &value in &values[1..] {
        if deck_key(value, deck_counts) > deck_key(best, deck_counts) {
            best = value;
        }
    }
    best
}
