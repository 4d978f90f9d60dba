//! # war-sim
//!
//! Monte Carlo study of how long games of the card game War last.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every game is a pure function of its RNG. A batch
//!    seed reproduces every deal and every shuffle of a won pot.
//!
//! 2. **Self-Contained Games**: A `Game` shares no state with any other game,
//!    so batches parallelize without locks.
//!
//! 3. **Elimination Is a Value**: Running out of cards is the normal end of a
//!    game. It travels up as `Err(OutOfCards)` and is converted into a
//!    finished game exactly once, at the top of the game loop.
//!
//! ## Modules
//!
//! - `core`: Player seats and hands, the `OutOfCards` condition, RNG
//! - `cards`: Cards and the 52-card deck
//! - `rules`: Round and game outcomes, observer hooks and the transcript
//! - `games`: The War game itself
//! - `simulation`: Parallel batches, statistics and histograms

pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{GameRng, OutOfCards, Player, PlayerId};

pub use crate::cards::{full_deck, shuffled_deck, Card, DECK_SIZE};

pub use crate::rules::{GameOutcome, GameResult, LogNarrator, RoundObserver, RoundReport, Silent, Table};

pub use crate::games::war::{Game, GameBuilder};

pub use crate::simulation::{Histogram, Simulation, SimulationConfig, SimulationReport, Summary};
