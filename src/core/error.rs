//! The game-ending condition.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A player had to draw from an empty hand.
///
/// This is how every game ends, not a failure. It is returned by
/// [`Player::draw`](super::Player::draw), passed up unchanged through round
/// resolution, and turned into a finished game by the top-level loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutOfCards {
    player: PlayerId,
    name: String,
}

impl OutOfCards {
    pub fn new(player: PlayerId, name: impl Into<String>) -> Self {
        Self {
            player,
            name: name.into(),
        }
    }

    /// Seat of the eliminated player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Name of the eliminated player.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for OutOfCards {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is out of cards", self.name)
    }
}

impl std::error::Error for OutOfCards {}
