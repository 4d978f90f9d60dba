//! Parallel batch runner.
//!
//! Plays every game of a batch on a rayon pool. Game `i` always gets the RNG
//! `GameRng::for_game(seed, i)`, so a batch is reproducible from its seed
//! whatever the thread count, and any single game can be replayed alone.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::core::{GameRng, PlayerId};
use crate::games::war::GameBuilder;
use crate::rules::{GameOutcome, GameResult, LogNarrator};

use super::config::SimulationConfig;
use super::histogram::Histogram;
use super::stats::Summary;

/// Results of a finished batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Round count of every game, in game-index order.
    #[serde(skip)]
    pub rounds: Vec<u32>,

    /// Games won by each seat.
    pub wins: [usize; 2],

    /// Games stopped by the round limit.
    pub round_limited: usize,

    /// Total wars across the batch.
    pub wars: u64,

    /// Most consecutive ties seen in any round of any game.
    pub longest_war: u32,

    /// Wall-clock time for the whole batch.
    pub elapsed: Duration,

    pub summary: Option<Summary>,

    pub histogram: Histogram,
}

impl SimulationReport {
    fn from_outcomes(outcomes: &[GameOutcome], bins: usize, elapsed: Duration) -> Self {
        let rounds: Vec<u32> = outcomes.iter().map(|o| o.rounds).collect();
        let mut wins = [0; 2];
        let mut round_limited = 0;
        for outcome in outcomes {
            match outcome.result {
                GameResult::Winner { winner, .. } => wins[winner.index()] += 1,
                GameResult::RoundLimit => round_limited += 1,
            }
        }

        Self {
            summary: Summary::from_rounds(&rounds),
            histogram: Histogram::new(&rounds, bins),
            wins,
            round_limited,
            wars: outcomes.iter().map(|o| u64::from(o.wars)).sum(),
            longest_war: outcomes.iter().map(|o| o.longest_war).max().unwrap_or(0),
            elapsed,
            rounds,
        }
    }

    /// Games won by `player`.
    #[must_use]
    pub fn wins_for(&self, player: PlayerId) -> usize {
        self.wins[player.index()]
    }
}

/// Runs batches of independent games.
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Create a simulation.
    ///
    /// # Panics
    ///
    /// If the config asks for zero games or zero histogram bins.
    pub fn new(config: SimulationConfig) -> Self {
        assert!(config.games > 0, "Must run at least 1 game");
        assert!(config.bins > 0, "Histogram needs at least 1 bin");
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn builder(&self) -> GameBuilder {
        match self.config.max_rounds {
            Some(max) => GameBuilder::new().max_rounds(max),
            None => GameBuilder::new(),
        }
    }

    /// Play game `index` of the batch silently.
    pub fn play_game(&self, index: u64) -> GameOutcome {
        let rng = GameRng::for_game(self.config.seed, index);
        let outcome = self.builder().build(rng).run();
        log::trace!("game {} finished in {} rounds", index, outcome.rounds);
        outcome
    }

    /// Play game `index` of the batch again with a logged transcript.
    ///
    /// Produces the same outcome `run` recorded for that game.
    pub fn replay(&self, index: u64) -> GameOutcome {
        let rng = GameRng::for_game(self.config.seed, index);
        log::info!("replaying game {} of seed {}", index, self.config.seed);
        self.builder().build_with_observer(rng, LogNarrator).run()
    }

    /// Play the whole batch.
    pub fn run(&self) -> Result<SimulationReport, rayon::ThreadPoolBuildError> {
        log::info!(
            "running {} games (seed {}, {} threads)",
            self.config.games,
            self.config.seed,
            if self.config.threads == 0 {
                rayon::current_num_threads()
            } else {
                self.config.threads
            }
        );

        let start = Instant::now();
        let outcomes = if self.config.threads == 0 {
            self.play_all()
        } else {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.threads)
                .build()?
                .install(|| self.play_all())
        };
        let elapsed = start.elapsed();

        log::info!("finished {} games in {:.1?}", outcomes.len(), elapsed);
        Ok(SimulationReport::from_outcomes(&outcomes, self.config.bins, elapsed))
    }

    fn play_all(&self) -> Vec<GameOutcome> {
        (0..self.config.games as u64)
            .into_par_iter()
            .map(|index| self.play_game(index))
            .collect()
    }
}
