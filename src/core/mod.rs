//! Core engine types: players, the game-ending error, RNG.
//!
//! Everything here is independent of the round rules in `games::war`.

pub mod error;
pub mod player;
pub mod rng;

pub use error::OutOfCards;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
