//! Property tests for decks, hands and whole games.

use proptest::prelude::*;

use war_sim::cards::deck::{is_full_deck, rank_counts};
use war_sim::{shuffled_deck, Card, Game, GameBuilder, GameRng, Player, PlayerId, DECK_SIZE};

fn rank() -> impl Strategy<Value = Card> {
    (2u8..=14).prop_map(Card::new)
}

proptest! {
    /// Test that shuffling never changes the deck.
    #[test]
    fn shuffled_deck_is_always_a_full_deck(seed in any::<u64>()) {
        let deck = shuffled_deck(&mut GameRng::new(seed));

        prop_assert_eq!(deck.len(), DECK_SIZE);
        let counts = rank_counts(&deck);
        for r in 2u8..=14 {
            prop_assert_eq!(counts[&r], 4);
        }
    }

    /// Test that a won pot goes behind the cards already held.
    #[test]
    fn receive_adds_exactly_the_given_cards(
        seed in any::<u64>(),
        start in prop::collection::vec(rank(), 0..20),
        won in prop::collection::vec(rank(), 0..12),
    ) {
        let mut rng = GameRng::new(seed);
        let mut player = Player::new(PlayerId::FIRST, "P", start.clone());
        let mut pot = won.clone();

        player.receive(&mut pot, &mut rng);

        prop_assert_eq!(player.len(), start.len() + won.len());
        let hand: Vec<Card> = player.hand().copied().collect();
        // Old cards keep their place at the front
        prop_assert_eq!(&hand[..start.len()], &start[..]);
        prop_assert_eq!(rank_counts(&hand[start.len()..]), rank_counts(&won));
    }

    /// Test that the deal gives each player half the deck.
    #[test]
    fn deal_splits_a_full_deck_evenly(seed in any::<u64>()) {
        let game = Game::new(GameRng::new(seed));
        prop_assert_eq!(game.hand_sizes(), [26, 26]);

        let dealt: Vec<Card> = PlayerId::both()
            .flat_map(|p| game.player(p).hand().copied().collect::<Vec<_>>())
            .collect();
        prop_assert!(is_full_deck(&dealt));
    }

    /// Test that every completed round leaves all cards in the hands.
    #[test]
    fn rounds_never_lose_cards(seed in any::<u64>(), steps in 1usize..200) {
        let mut game = GameBuilder::new().build(GameRng::new(seed));

        for _ in 0..steps {
            if game.step().is_err() {
                break;
            }
            // Between rounds the pot is empty
            prop_assert_eq!(game.hand_sizes()[0] + game.hand_sizes()[1], DECK_SIZE);
        }
    }
}
