use crate::{Card, Rank, RngState, Suit};

/// Draw pile. Cards leave through `draw` and never come back; played cards
/// are gone for the rest of the game.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    /// Removes and returns the top card, or `None` once the deck runs dry.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Copies left per rank, indexed by `Rank::value() - 1`.
    pub fn rank_counts(&self) -> [u8; 13] {
        let mut counts = [0u8; 13];
        for card in &self.cards {
            counts[card.rank.value() as usize - 1] += 1;
        }
        counts
    }

    /// Copies left per suit, indexed by `Suit::index()`.
    pub fn suit_counts(&self) -> [u8; 4] {
        let mut counts = [0u8; 4];
        for card in &self.cards {
            counts[card.suit.index()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_one_of_each() {
        let deck = Deck::standard52();
        assert_eq!(deck.remaining(), 52);
        assert!(deck.rank_counts().iter().all(|&count| count == 4));
        assert!(deck.suit_counts().iter().all(|&count| count == 13));
    }

    #[test]
    fn draw_past_empty_yields_none() {
        let mut deck = Deck::standard52();
        for _ in 0..52 {
            assert!(deck.draw().is_some());
        }
        assert!(deck.draw().is_none());
        assert!(deck.is_empty());
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let mut a = Deck::standard52();
        let mut b = Deck::standard52();
        a.shuffle(&mut RngState::from_seed(7));
        b.shuffle(&mut RngState::from_seed(7));
        assert_eq!(a.draw(), b.draw());
        assert_eq!(a.draw(), b.draw());
    }
}
