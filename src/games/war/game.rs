//! War game implementation.

use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::cards::{shuffled_deck, Card, DECK_SIZE};
use crate::core::{GameRng, OutOfCards, Player, PlayerId};
use crate::rules::{GameOutcome, GameResult, RoundObserver, RoundReport, Silent, Table};

/// Pot storage. Most rounds hold two cards and a single war holds six.
type Pot = SmallVec<[Card; 8]>;

/// A two-player game of War.
///
/// Every hook of the observer `O` is called synchronously from `step`/`run`.
pub struct Game<O: RoundObserver = Silent> {
    players: [Player; 2],
    rng: GameRng,
    observer: O,
    /// Cards in play, fixed at construction.
    total_cards: usize,
    max_rounds: Option<u32>,
    rounds: u32,
    wars: u32,
    longest_war: u32,
}

/// Builder for creating a Game.
pub struct GameBuilder {
    names: [String; 2],
    hands: Option<[Vec<Card>; 2]>,
    max_rounds: Option<u32>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            names: [PlayerId::FIRST.to_string(), PlayerId::SECOND.to_string()],
            hands: None,
            max_rounds: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.names = [first.into(), second.into()];
        self
    }

    /// Deal these exact hands, front card first, instead of a shuffled deck.
    pub fn hands(
        mut self,
        first: impl IntoIterator<Item = Card>,
        second: impl IntoIterator<Item = Card>,
    ) -> Self {
        self.hands = Some([first.into_iter().collect(), second.into_iter().collect()]);
        self
    }

    /// Stop after `max` rounds even if both players still hold cards.
    pub fn max_rounds(mut self, max: u32) -> Self {
        self.max_rounds = Some(max);
        self
    }

    /// Build a silent game.
    pub fn build(self, rng: GameRng) -> Game {
        self.build_with_observer(rng, Silent)
    }

    /// Build a game that reports its events to `observer`.
    pub fn build_with_observer<O: RoundObserver>(self, mut rng: GameRng, observer: O) -> Game<O> {
        let [first, second] = match self.hands {
            Some(hands) => hands,
            None => {
                let mut deck = shuffled_deck(&mut rng);
                let second = deck.split_off(DECK_SIZE / 2);
                [deck, second]
            }
        };
        let [first_name, second_name] = self.names;
        let players = [
            Player::new(PlayerId::FIRST, first_name, first),
            Player::new(PlayerId::SECOND, second_name, second),
        ];
        let total_cards = players.iter().map(Player::len).sum();

        Game {
            players,
            rng,
            observer,
            total_cards,
            max_rounds: self.max_rounds,
            rounds: 0,
            wars: 0,
            longest_war: 0,
        }
    }
}

impl Game {
    /// Shuffle a full deck with `rng` and deal 26 cards to each player.
    pub fn new(rng: GameRng) -> Self {
        GameBuilder::new().build(rng)
    }
}

impl<O: RoundObserver> Game<O> {
    /// Play until a player runs out of cards and return the number of rounds.
    pub fn play(&mut self) -> u32 {
        self.run().rounds
    }

    /// Play until the game ends and return the full outcome.
    pub fn run(&mut self) -> GameOutcome {
        let result = loop {
            if self.max_rounds.is_some_and(|max| self.rounds >= max) {
                break GameResult::RoundLimit;
            }
            match self.step() {
                Ok(_) => {}
                Err(out) => {
                    self.observer.on_eliminated(&out);
                    break GameResult::eliminated(out.player());
                }
            }
        };

        let outcome = GameOutcome {
            rounds: self.rounds,
            wars: self.wars,
            longest_war: self.longest_war,
            result,
        };
        log::debug!(
            "game over after {} rounds ({} wars, longest {})",
            outcome.rounds,
            outcome.wars,
            outcome.longest_war
        );
        self.observer.on_game_over(&outcome);
        outcome
    }

    /// Resolve exactly one round, including any wars it escalates into.
    ///
    /// The round counter only advances when the round completes. On error
    /// the cards already in the pot are gone and the game is over.
    pub fn step(&mut self) -> Result<RoundReport, OutOfCards> {
        self.observer.on_round_start(self.rounds + 1);
        let report = self.resolve_round()?;
        self.rounds += 1;
        Ok(report)
    }

    fn resolve_round(&mut self) -> Result<RoundReport, OutOfCards> {
        let mut pot = Pot::new();
        let mut depth = 0;

        loop {
            // Seat order is fixed: the first player is always asked first.
            let first = self.players[0].draw()?;
            let second = self.players[1].draw()?;
            pot.push(first);
            pot.push(second);
            self.check_conservation(&pot);

            let hands = self.hand_sizes();
            self.observer
                .on_confrontation(depth, first, second, Table { hands, pot: &pot });

            let winner = match first.cmp(&second) {
                Ordering::Greater => PlayerId::FIRST,
                Ordering::Less => PlayerId::SECOND,
                Ordering::Equal => {
                    self.wars += 1;
                    // Face-down cards join the pot without being compared.
                    let down_first = self.players[0].draw()?;
                    let down_second = self.players[1].draw()?;
                    pot.push(down_first);
                    pot.push(down_second);
                    self.check_conservation(&pot);

                    let hands = self.hand_sizes();
                    self.observer
                        .on_war(depth, (down_first, down_second), Table { hands, pot: &pot });

                    depth += 1;
                    self.longest_war = self.longest_war.max(depth);
                    continue;
                }
            };

            let pot_size = pot.len();
            self.players[winner.index()].receive(&mut pot, &mut self.rng);
            let hands = self.hand_sizes();
            self.observer.on_pot_won(depth, winner, &pot, hands);

            return Ok(RoundReport {
                winner,
                pot_size,
                war_depth: depth,
            });
        }
    }

    fn check_conservation(&self, pot: &[Card]) {
        debug_assert_eq!(
            self.players[0].len() + self.players[1].len() + pot.len(),
            self.total_cards,
            "cards must only move between hands and the pot"
        );
    }

    /// Cards in each hand, indexed by seat.
    #[must_use]
    pub fn hand_sizes(&self) -> [usize; 2] {
        [self.players[0].len(), self.players[1].len()]
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Rounds completed so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Cards dealt at the start of the game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
