//! The card game War.
//!
//! - A shuffled 52-card deck is split 26/26
//! - Each round both players turn over their top card; the higher rank takes
//!   both cards
//! - On a tie each player adds one face-down card and the round continues
//!   with the next face-up pair, as many times as it takes
//! - A player who has to draw from an empty hand loses, including in the
//!   middle of a war
//! - Won cards go to the bottom of the winner's hand in random order

mod game;

pub use game::{Game, GameBuilder};
