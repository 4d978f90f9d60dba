//! Simulation batch configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a batch of games.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: usize,

    /// Batch seed. Game `i` uses ChaCha stream `i` of this seed.
    pub seed: u64,

    /// Histogram bin count.
    pub bins: usize,

    /// Worker threads (0 = rayon's global pool, one per core).
    pub threads: usize,

    /// Optional cap on rounds per game. `None` plays every game out.
    pub max_rounds: Option<u32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100_000,
            seed: 42,
            bins: 100,
            threads: 0,
            max_rounds: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the batch seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the histogram bin count.
    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Set the worker thread count.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Cap every game at `max` rounds.
    pub fn with_max_rounds(mut self, max: u32) -> Self {
        self.max_rounds = Some(max);
        self
    }
}
