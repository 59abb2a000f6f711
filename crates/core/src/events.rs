use crate::HandKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    HandDealt { count: usize },
    HandPlayed {
        kind: HandKind,
        score: i64,
        total: i64,
    },
    CardsDiscarded { count: usize },
    GameWon { score: i64, plays_used: u8 },
    GameExhausted { score: i64 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
