//! Results of rounds and games.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// `loser` had to draw from an empty hand.
    Winner { winner: PlayerId, loser: PlayerId },
    /// The configured round limit was reached with both players holding cards.
    RoundLimit,
}

impl GameResult {
    /// Result for a game lost by `loser`.
    #[must_use]
    pub fn eliminated(loser: PlayerId) -> Self {
        GameResult::Winner {
            winner: loser.opponent(),
            loser,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner { winner, .. } => *winner == player,
            GameResult::RoundLimit => false,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner { winner, .. } => Some(*winner),
            GameResult::RoundLimit => None,
        }
    }
}

/// Summary of one finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Rounds completed before the game ended.
    pub rounds: u32,

    /// Ties resolved or interrupted, counted once per escalation.
    pub wars: u32,

    /// Most consecutive ties within one round.
    pub longest_war: u32,

    pub result: GameResult,
}

/// Summary of one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Seat that took the pot.
    pub winner: PlayerId,

    /// Cards in the pot, both face-up and face-down.
    pub pot_size: usize,

    /// Number of ties before the deciding confrontation (0 = no war).
    pub war_depth: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::eliminated(PlayerId::FIRST);
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));
        assert_eq!(result.winner(), Some(PlayerId::SECOND));
        assert_eq!(
            result,
            GameResult::Winner {
                winner: PlayerId::SECOND,
                loser: PlayerId::FIRST
            }
        );

        let limit = GameResult::RoundLimit;
        assert!(!limit.is_winner(PlayerId::FIRST));
        assert!(!limit.is_winner(PlayerId::SECOND));
        assert_eq!(limit.winner(), None);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = GameOutcome {
            rounds: 312,
            wars: 21,
            longest_war: 2,
            result: GameResult::eliminated(PlayerId::SECOND),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: GameOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
