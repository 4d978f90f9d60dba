//! Batch simulation of many independent games.
//!
//! ## Overview
//!
//! - **SimulationConfig**: batch size, seed, histogram bins, thread count
//! - **Simulation**: plays the batch in parallel and replays single games
//! - **Summary**: mean, median, extremes and tail percentiles of game length
//! - **Histogram**: equal-width bins rendered as text
//!
//! ## Usage
//!
//! ```no_run
//! use war_sim::simulation::{Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::default()
//!     .with_games(10_000)
//!     .with_seed(7);
//!
//! let report = Simulation::new(config).run().expect("thread pool");
//! if let Some(summary) = &report.summary {
//!     println!("mean game length: {:.0} rounds", summary.mean);
//! }
//! print!("{}", report.histogram.render(60));
//! ```

pub mod config;
pub mod histogram;
pub mod runner;
pub mod stats;

pub use config::SimulationConfig;
pub use histogram::Histogram;
pub use runner::{Simulation, SimulationReport};
pub use stats::{percentile, Summary};
