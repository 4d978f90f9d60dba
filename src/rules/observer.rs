//! Hooks for watching a game as it is played.
//!
//! The game never prints anything itself. Anything that wants a transcript,
//! counters or invariant checks implements `RoundObserver` and is handed to
//! the game at construction.

use crate::cards::Card;
use crate::core::{OutOfCards, PlayerId};

use super::outcome::GameOutcome;

/// Card counts at the moment a hook fires.
#[derive(Clone, Copy, Debug)]
pub struct Table<'a> {
    /// Cards in each hand, indexed by seat.
    pub hands: [usize; 2],
    /// Cards committed to the current round.
    pub pot: &'a [Card],
}

impl Table<'_> {
    /// Cards in both hands plus the pot.
    #[must_use]
    pub fn total(&self) -> usize {
        self.hands[0] + self.hands[1] + self.pot.len()
    }
}

/// Observer of game events.
///
/// All hooks default to no-ops. `depth` counts the ties already resolved in
/// the current round (0 for the opening confrontation).
pub trait RoundObserver {
    /// A new round is about to start. `round` is 1-based.
    fn on_round_start(&mut self, _round: u32) {}

    /// Both face-up cards are in the pot.
    fn on_confrontation(&mut self, _depth: u32, _first: Card, _second: Card, _table: Table<'_>) {}

    /// The face-up cards tied and both face-down cards are in the pot.
    fn on_war(&mut self, _depth: u32, _face_down: (Card, Card), _table: Table<'_>) {}

    /// `winner` took the pot. `pot` is in the order it was added to the hand.
    fn on_pot_won(&mut self, _depth: u32, _winner: PlayerId, _pot: &[Card], _hands: [usize; 2]) {}

    /// A draw failed and the game is over.
    fn on_eliminated(&mut self, _reason: &OutOfCards) {}

    fn on_game_over(&mut self, _outcome: &GameOutcome) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl RoundObserver for Silent {}

/// Writes a round-by-round transcript through the `log` facade at info level.
///
/// ```text
/// ROUND 1
///   10 vs 10
///   TIE!
///     4 vs K
///     P2 wins [K,4,10,3,10,7] (23 vs 29)
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNarrator;

impl LogNarrator {
    fn indent(depth: u32) -> String {
        "  ".repeat(depth as usize + 1)
    }
}

impl RoundObserver for LogNarrator {
    fn on_round_start(&mut self, round: u32) {
        log::info!("ROUND {}", round);
    }

    fn on_confrontation(&mut self, depth: u32, first: Card, second: Card, table: Table<'_>) {
        log::info!("{}{} vs {}", Self::indent(depth), first, second);
        if first == second {
            log::info!("{}TIE!", Self::indent(depth));
        }
        log::trace!("{}pot holds {} cards", Self::indent(depth), table.pot.len());
    }

    fn on_pot_won(&mut self, depth: u32, winner: PlayerId, pot: &[Card], hands: [usize; 2]) {
        let cards = pot.iter().map(Card::to_string).collect::<Vec<_>>().join(",");
        log::info!(
            "{}P{} wins [{}] ({} vs {})",
            Self::indent(depth),
            winner.index() + 1,
            cards,
            hands[0],
            hands[1]
        );
    }

    fn on_eliminated(&mut self, reason: &OutOfCards) {
        log::info!("{}", reason);
    }

    fn on_game_over(&mut self, outcome: &GameOutcome) {
        log::info!("Game complete in {} rounds", outcome.rounds);
    }
}
