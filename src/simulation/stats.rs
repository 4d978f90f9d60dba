//! Summary statistics over game lengths.

use serde::{Deserialize, Serialize};

/// Distribution summary of a batch of round counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub games: usize,
    pub mean: f64,
    pub median: f64,
    pub min: u32,
    pub max: u32,
    pub p95: f64,
    pub p99: f64,
    pub p999: f64,
}

impl Summary {
    /// Summarize a batch. Returns `None` for an empty batch.
    #[must_use]
    pub fn from_rounds(rounds: &[u32]) -> Option<Self> {
        let mut sorted = rounds.to_vec();
        sorted.sort_unstable();

        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let total: u64 = sorted.iter().map(|&r| u64::from(r)).sum();

        Some(Self {
            games: sorted.len(),
            mean: total as f64 / sorted.len() as f64,
            median: percentile(&sorted, 50.0),
            min,
            max,
            p95: percentile(&sorted, 95.0),
            p99: percentile(&sorted, 99.0),
            p999: percentile(&sorted, 99.9),
        })
    }
}

/// The `q`th percentile (0..=100) of ascending `sorted`.
///
/// Interpolates linearly between the two closest ranks, so the 50th
/// percentile of an even-length batch is the mean of the middle pair.
///
/// # Panics
///
/// If `sorted` is empty.
#[must_use]
pub fn percentile(sorted: &[u32], q: f64) -> f64 {
    assert!(!sorted.is_empty(), "percentile of an empty batch");
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let position = q.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    let low = f64::from(sorted[lower]);
    let high = f64::from(sorted[upper]);
    low + (high - low) * fraction
}
