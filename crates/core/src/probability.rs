use crate::STRAIGHT_WINDOWS;

/// Chance that `draws` cards from a deck with the given per-rank counts
/// complete at least one of the target windows, given the rank values
/// already held. Per window only one copy of each missing rank is useful;
/// the remaining draws must come from the rest of the deck. Windows overlap,
/// so the summed result is capped at 1.0 rather than union-bounded exactly.
pub fn window_completion(
    held_ranks: &[u8],
    deck_rank_counts: &[u8; 13],
    draws: usize,
    windows: &[[u8; 5]],
) -> f64 {
    let deck_size: usize = deck_rank_counts.iter().map(|&count| count as usize).sum();
    let draws = draws.min(deck_size);

    let mut held = [false; 13];
    for &value in held_ranks {
        if (1..=13).contains(&value) {
            held[value as usize - 1] = true;
        }
    }

    let mut total = 0.0f64;
    for window in windows {
        let missing: Vec<u8> = window
            .iter()
            .copied()
            .filter(|&value| !held[value as usize - 1])
            .collect();
        if missing.len() > draws {
            continue;
        }
        if missing.is_empty() {
            total += 1.0;
            continue;
        }
        if missing
            .iter()
            .any(|&value| deck_rank_counts[value as usize - 1] == 0)
        {
            continue;
        }
        let useful: u64 = missing
            .iter()
            .map(|&value| deck_rank_counts[value as usize - 1] as u64)
            .sum();
        let ways_needed: f64 = missing
            .iter()
            .map(|&value| deck_rank_counts[value as usize - 1] as f64)
            .product();
        let rest = deck_size as u64 - useful;
        let filler = binomial(rest, (draws - missing.len()) as u64);
        let all = binomial(deck_size as u64, draws as u64);
        if all > 0.0 {
            total += ways_needed * filler / all;
        }
    }
    total.min(1.0)
}

/// `window_completion` over the ten straight windows.
pub fn straight_probability(held_ranks: &[u8], deck_rank_counts: &[u8; 13], draws: usize) -> f64 {
    window_completion(held_ranks, deck_rank_counts, draws, &STRAIGHT_WINDOWS)
}

/// Chance of reaching five cards of one suit: at least `5 - held_in_suit`
/// of the `suit_left` copies must show up within `draws` draws.
pub fn flush_probability(held_in_suit: usize, suit_left: u8, deck_size: usize, draws: usize) -> f64 {
    if held_in_suit >= 5 {
        return 1.0;
    }
    let need = (5 - held_in_suit) as u64;
    let draws = draws.min(deck_size) as u64;
    let suit_left = suit_left as u64;
    let deck_size = deck_size as u64;
    if need > draws || suit_left < need {
        return 0.0;
    }
    let all = binomial(deck_size, draws);
    if all == 0.0 {
        return 0.0;
    }
    let mut hit = 0.0f64;
    for taken in need..=draws.min(suit_left) {
        hit += binomial(suit_left, taken) * binomial(deck_size - suit_left, draws - taken);
    }
    (hit / all).min(1.0)
}

fn binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0f64;
    for i in 1..=k {
        result = result * (n - k + i) as f64 / i as f64;
    }
    result
}
