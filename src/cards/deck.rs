//! Deck construction.

use rustc_hash::FxHashMap;

use super::card::{Card, MAX_RANK, MIN_RANK};
use crate::core::GameRng;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;
/// Suits in a full deck. Suits only decide how many copies of each rank exist.
pub const SUIT_COUNT: usize = 4;

/// All 52 cards in suit-major order: 2..=A four times over.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for _suit in 0..SUIT_COUNT {
        deck.extend((MIN_RANK..=MAX_RANK).map(Card::new));
    }
    deck
}

/// All 52 cards in uniformly random order.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Multiplicity of each rank in `cards`.
#[must_use]
pub fn rank_counts(cards: &[Card]) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for card in cards {
        *counts.entry(card.rank()).or_insert(0) += 1;
    }
    counts
}

/// Is `cards` exactly one full deck, in any order?
#[must_use]
pub fn is_full_deck(cards: &[Card]) -> bool {
    if cards.len() != DECK_SIZE {
        return false;
    }
    let counts = rank_counts(cards);
    counts.len() == (MAX_RANK - MIN_RANK + 1) as usize && counts.values().all(|&n| n == SUIT_COUNT)
}
