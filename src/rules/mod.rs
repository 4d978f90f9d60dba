//! Game results and the observer seam.
//!
//! - `outcome`: what a round or a whole game produced
//! - `observer`: hooks called while a game is played, plus the transcript
//!   narrator

pub mod observer;
pub mod outcome;

pub use observer::{LogNarrator, RoundObserver, Silent, Table};
pub use outcome::{GameOutcome, GameResult, RoundReport};
