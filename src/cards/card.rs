//! Playing cards.
//!
//! Only the rank matters in War, so a `Card` is just a rank from 2 to 14.
//! Suits are never stored.

use serde::{Deserialize, Serialize};

/// Lowest rank (the two).
pub const MIN_RANK: u8 = 2;
/// Highest rank (the ace).
pub const MAX_RANK: u8 = 14;

/// One playing card, compared by rank only.
///
/// 11, 12, 13 and 14 are Jack, Queen, King and Ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card {
    rank: u8,
}

impl Card {
    /// Create a card.
    ///
    /// # Panics
    ///
    /// If `rank` is outside 2..=14.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        assert!(rank >= MIN_RANK && rank <= MAX_RANK, "Card rank must be 2-14");
        Self { rank }
    }

    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }
}

/// A rank outside 2..=14 read from serialized input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidRank(pub u8);

impl std::fmt::Display for InvalidRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid card rank {} (expected {}-{})", self.0, MIN_RANK, MAX_RANK)
    }
}

impl std::error::Error for InvalidRank {}

impl TryFrom<u8> for Card {
    type Error = InvalidRank;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        if (MIN_RANK..=MAX_RANK).contains(&rank) {
            Ok(Self { rank })
        } else {
            Err(InvalidRank(rank))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            14 => f.write_str("A"),
            n => write!(f, "{}", n),
        }
    }
}
