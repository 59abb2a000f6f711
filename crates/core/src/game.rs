use crate::{evaluate, Card, Deck, Event, EventBus, GameConfig, HandKind, RngState};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("game is over")]
    GameOver,
    #[error("no plays left")]
    NoPlaysLeft,
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("invalid card selection")]
    InvalidSelection,
    #[error("invalid card count")]
    InvalidCardCount,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Exhausted,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayRecord {
    pub cards: Vec<Card>,
    pub kind: HandKind,
    pub score: i64,
}

/// One game of draw poker against a target score. All mutation goes through
/// `play` and `discard`; a rejected action leaves every field untouched.
///
/// Replacement rule: discards and plays both draw 1:1 replacements for the
/// removed cards, best-effort once the deck runs dry. Wheel and ace-high
/// straights are both valid.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rng: RngState,
    deck: Deck,
    hand: Vec<Card>,
    score: i64,
    plays_left: u8,
    discards_left: u8,
    played_away: usize,
    abandoned: bool,
    history: Vec<PlayRecord>,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard52();
        deck.shuffle(&mut rng);
        let mut hand = Vec::with_capacity(config.hand_size);
        for _ in 0..config.hand_size {
            match deck.draw() {
                Some(card) => hand.push(card),
                None => break,
            }
        }
        Self {
            config,
            rng,
            deck,
            hand,
            score: 0,
            plays_left: config.plays,
            discards_left: config.discards,
            played_away: 0,
            abandoned: false,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn plays_left(&self) -> u8 {
        self.plays_left
    }

    pub fn discards_left(&self) -> u8 {
        self.discards_left
    }

    pub fn won(&self) -> bool {
        self.score >= self.config.target_score
    }

    pub fn history(&self) -> &[PlayRecord] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        if self.won() {
            GameStatus::Won
        } else if self.abandoned || (self.plays_left == 0 && self.discards_left == 0) {
            GameStatus::Exhausted
        } else {
            GameStatus::InProgress
        }
    }

    /// Cards accounted for across hand, deck and plays. 52 at all times.
    pub fn cards_accounted(&self) -> usize {
        self.hand.len() + self.deck.remaining() + self.played_away
    }

    /// Plays the selected cards: scores them, removes them from the game and
    /// draws replacements. Returns the history record for the play.
    pub fn play(&mut self, indices: &[usize], events: &mut EventBus) -> Result<PlayRecord, GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if self.plays_left == 0 {
            return Err(GameError::NoPlaysLeft);
        }
        if indices.len() > 5 {
            return Err(GameError::InvalidCardCount);
        }
        let played = take_cards(&mut self.hand, indices)?;
        let (kind, score) = evaluate(&played);
        self.score += score;
        self.plays_left -= 1;
        self.played_away += played.len();
        let record = PlayRecord {
            cards: played,
            kind,
            score,
        };
        self.history.push(record.clone());
        events.push(Event::HandPlayed {
            kind,
            score,
            total: self.score,
        });
        self.draw_replacements(record.cards.len(), events);
        match self.status() {
            GameStatus::Won => events.push(Event::GameWon {
                score: self.score,
                plays_used: self.config.plays - self.plays_left,
            }),
            GameStatus::Exhausted => events.push(Event::GameExhausted { score: self.score }),
            GameStatus::InProgress => {}
        }
        Ok(record)
    }

    /// Swaps the selected cards for fresh draws. Costs one discard and never
    /// touches the score or the play budget.
    pub fn discard(&mut self, indices: &[usize], events: &mut EventBus) -> Result<(), GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }
        if self.discards_left == 0 {
            return Err(GameError::NoDiscardsLeft);
        }
        if indices.len() > 5 {
            return Err(GameError::InvalidCardCount);
        }
        let discarded = take_cards(&mut self.hand, indices)?;
        self.discards_left -= 1;
        self.played_away += discarded.len();
        events.push(Event::CardsDiscarded {
            count: discarded.len(),
        });
        self.draw_replacements(discarded.len(), events);
        if self.status() == GameStatus::Exhausted {
            events.push(Event::GameExhausted { score: self.score });
        }
        Ok(())
    }

    /// Ends the game as exhausted even though budget remains. Used by the
    /// driving loop's stalemate guard when no strategy action applies.
    pub fn abandon(&mut self, events: &mut EventBus) {
        if self.status() == GameStatus::InProgress {
            self.abandoned = true;
            events.push(Event::GameExhausted { score: self.score });
        }
    }

    fn draw_replacements(&mut self, count: usize, events: &mut EventBus) {
        let mut drawn = 0;
        for _ in 0..count {
            match self.deck.draw() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        if drawn > 0 {
            events.push(Event::HandDealt { count: drawn });
        }
    }
}

/// Validates the selection, then removes those cards from the hand. Out of
/// range or repeated indices reject the whole action before any mutation.
fn take_cards(hand: &mut Vec<Card>, indices: &[usize]) -> Result<Vec<Card>, GameError> {
    if indices.is_empty() {
        return Err(GameError::InvalidSelection);
    }
    let mut ordered = indices.to_vec();
    ordered.sort_unstable();
    if ordered.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(GameError::InvalidSelection);
    }
    if ordered.iter().any(|&idx| idx >= hand.len()) {
        return Err(GameError::InvalidSelection);
    }
    let mut picked = Vec::with_capacity(ordered.len());
    for &idx in ordered.iter().rev() {
        picked.push(hand.remove(idx));
    }
    picked.reverse();
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> (Game, EventBus) {
        (Game::new(GameConfig::default(), 11), EventBus::default())
    }

    #[test]
    fn deal_fills_the_hand() {
        let (game, _) = new_game();
        assert_eq!(game.hand().len(), 8);
        assert_eq!(game.deck().remaining(), 44);
        assert_eq!(game.cards_accounted(), 52);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn play_consumes_plays_only() {
        let (mut game, mut events) = new_game();
        let record = game.play(&[0, 1, 2], &mut events).unwrap();
        assert_eq!(record.cards.len(), 3);
        assert_eq!(game.plays_left(), 3);
        assert_eq!(game.discards_left(), 4);
        assert_eq!(game.hand().len(), 8);
        assert_eq!(game.cards_accounted(), 52);
        assert_eq!(game.score(), record.score);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn discard_consumes_discards_only() {
        let (mut game, mut events) = new_game();
        game.discard(&[4, 7], &mut events).unwrap();
        assert_eq!(game.plays_left(), 4);
        assert_eq!(game.discards_left(), 3);
        assert_eq!(game.hand().len(), 8);
        assert_eq!(game.cards_accounted(), 52);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn bad_selections_consume_nothing() {
        let (mut game, mut events) = new_game();
        let before: Vec<Card> = game.hand().to_vec();

        assert_eq!(game.play(&[], &mut events), Err(GameError::InvalidSelection));
        assert_eq!(
            game.play(&[0, 0], &mut events),
            Err(GameError::InvalidSelection)
        );
        assert_eq!(
            game.play(&[8], &mut events),
            Err(GameError::InvalidSelection)
        );
        assert_eq!(
            game.play(&[0, 1, 2, 3, 4, 5], &mut events),
            Err(GameError::InvalidCardCount)
        );
        assert_eq!(
            game.discard(&[3, 3], &mut events),
            Err(GameError::InvalidSelection)
        );

        assert_eq!(game.hand(), before.as_slice());
        assert_eq!(game.plays_left(), 4);
        assert_eq!(game.discards_left(), 4);
        assert_eq!(game.cards_accounted(), 52);
    }

    #[test]
    fn budgets_gate_actions() {
        let (mut game, mut events) = new_game();
        for _ in 0..4 {
            game.discard(&[0], &mut events).unwrap();
        }
        assert_eq!(
            game.discard(&[0], &mut events),
            Err(GameError::NoDiscardsLeft)
        );
        for _ in 0..4 {
            game.play(&[0], &mut events).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Exhausted);
        assert_eq!(game.play(&[0], &mut events), Err(GameError::GameOver));
    }

    #[test]
    fn conservation_holds_through_a_full_game() {
        let (mut game, mut events) = new_game();
        let actions: [&[usize]; 8] = [
            &[0, 1, 2, 3, 4],
            &[0, 1],
            &[5, 6, 7],
            &[0, 1, 2, 3],
            &[2, 4],
            &[0, 1, 2, 3, 4],
            &[1],
            &[0, 2, 4, 6],
        ];
        for (turn, indices) in actions.iter().enumerate() {
            if turn % 2 == 0 {
                let _ = game.play(indices, &mut events);
            } else {
                let _ = game.discard(indices, &mut events);
            }
            assert_eq!(game.cards_accounted(), 52);
        }
    }

    #[test]
    fn empty_deck_draws_are_non_fatal() {
        let config = GameConfig {
            plays: 12,
            discards: 0,
            ..GameConfig::default()
        };
        let mut game = Game::new(config, 3);
        let mut events = EventBus::default();
        while game.status() == GameStatus::InProgress && !game.hand().is_empty() {
            let count = game.hand().len().min(5);
            let indices: Vec<usize> = (0..count).collect();
            game.play(&indices, &mut events).unwrap();
            assert_eq!(game.cards_accounted(), 52);
        }
        assert!(game.deck().is_empty() || game.status() != GameStatus::InProgress);
    }

    #[test]
    fn same_seed_same_game() {
        let mut events = EventBus::default();
        let mut a = Game::new(GameConfig::default(), 99);
        let mut b = Game::new(GameConfig::default(), 99);
        assert_eq!(a.hand(), b.hand());
        let ra = a.play(&[0, 1, 2, 3, 4], &mut events).unwrap();
        let rb = b.play(&[0, 1, 2, 3, 4], &mut events).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a.hand(), b.hand());
    }

    #[test]
    fn abandon_ends_the_game() {
        let (mut game, mut events) = new_game();
        game.abandon(&mut events);
        assert_eq!(game.status(), GameStatus::Exhausted);
        assert_eq!(game.play(&[0], &mut events), Err(GameError::GameOver));
    }
}
