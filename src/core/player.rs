//! Player seats and hands.
//!
//! ## PlayerId
//!
//! Seat identifier for the two players of a game. Seat order matters: the
//! first player always draws before the second.
//!
//! ## Player
//!
//! A named hand of cards used as a queue: cards are played from the front
//! and won cards are appended to the back in random order.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::error::OutOfCards;
use super::rng::GameRng;
use crate::cards::Card;

/// Player seat. War is always played by exactly two seats.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who draws first in every step.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The player who draws second in every step.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both seats in draw order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// A player and the cards they hold.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: VecDeque<Card>,
}

impl Player {
    /// Create a player holding `cards`, front card first.
    pub fn new(id: PlayerId, name: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        assert!(id.index() < 2, "War is played by exactly two seats");
        Self {
            id,
            name: name.into(),
            hand: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Cards in play order, front first.
    pub fn hand(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter()
    }

    /// Play the front card.
    ///
    /// An empty hand means this player has lost the game.
    pub fn draw(&mut self) -> Result<Card, OutOfCards> {
        self.hand
            .pop_front()
            .ok_or_else(|| OutOfCards::new(self.id, self.name.clone()))
    }

    /// Take a won pot: shuffle it and append it to the back of the hand.
    ///
    /// The shuffle is what keeps games finite. Returning cards in a fixed
    /// order lets some deals cycle through the same confrontations forever.
    pub fn receive(&mut self, cards: &mut [Card], rng: &mut GameRng) {
        rng.shuffle(cards);
        self.hand.extend(cards.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::rank_counts;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r)).collect()
    }

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
        assert_eq!(format!("{}", PlayerId::SECOND), "Player 2");
    }

    #[test]
    fn test_player_id_both() {
        let seats: Vec<_> = PlayerId::both().collect();
        assert_eq!(seats, vec![PlayerId::FIRST, PlayerId::SECOND]);
    }

    #[test]
    fn test_draw_from_front() {
        let mut player = Player::new(PlayerId::FIRST, "Alice", cards(&[5, 9, 14]));

        assert_eq!(player.draw().unwrap().rank(), 5);
        assert_eq!(player.draw().unwrap().rank(), 9);
        assert_eq!(player.len(), 1);
    }

    #[test]
    fn test_draw_empty_hand() {
        let mut player = Player::new(PlayerId::SECOND, "Bob", Vec::new());

        let err = player.draw().unwrap_err();
        assert_eq!(err.player(), PlayerId::SECOND);
        assert_eq!(err.name(), "Bob");
        assert_eq!(err.to_string(), "Bob is out of cards");
    }

    #[test]
    fn test_receive_appends_to_back() {
        let mut rng = GameRng::new(3);
        let mut player = Player::new(PlayerId::FIRST, "Alice", cards(&[2]));
        let mut won = cards(&[11, 12, 13]);

        player.receive(&mut won, &mut rng);

        assert_eq!(player.len(), 4);
        // Existing cards stay in front
        assert_eq!(player.hand().next().unwrap().rank(), 2);

        let added: Vec<Card> = player.hand().skip(1).copied().collect();
        assert_eq!(rank_counts(&added), rank_counts(&cards(&[11, 12, 13])));
    }

    #[test]
    fn test_receive_nothing() {
        let mut rng = GameRng::new(3);
        let mut player = Player::new(PlayerId::FIRST, "Alice", cards(&[2, 3]));

        player.receive(&mut [], &mut rng);
        assert_eq!(player.len(), 2);
    }

    #[test]
    #[should_panic(expected = "exactly two seats")]
    fn test_invalid_seat() {
        let _ = Player::new(PlayerId(2), "Carol", Vec::new());
    }
}
