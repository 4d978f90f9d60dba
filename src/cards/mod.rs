//! Cards and decks.
//!
//! - `Card`: an immutable rank, 2 through Ace
//! - `deck`: the 52-card set and its shuffled form

pub mod card;
pub mod deck;

pub use card::{Card, InvalidRank, MAX_RANK, MIN_RANK};
pub use deck::{full_deck, rank_counts, shuffled_deck, DECK_SIZE};
