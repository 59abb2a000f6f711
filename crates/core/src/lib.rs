//! Game rules and state. Nothing in this crate touches IO, clocks or
//! ambient randomness; a seed in is a game out.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod hand;
pub mod probability;
pub mod rng;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use hand::*;
pub use probability::*;
pub use rng::*;
