//! Equal-width histogram of game lengths, rendered as text.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Counts of round totals in equal-width bins spanning `[min, max]`.
///
/// Every bin is half-open except the last, which also includes `max`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub min: u32,
    pub max: u32,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `rounds` into `bins` buckets.
    ///
    /// # Panics
    ///
    /// If `bins` is zero.
    #[must_use]
    pub fn new(rounds: &[u32], bins: usize) -> Self {
        assert!(bins > 0, "Histogram needs at least 1 bin");

        let min = rounds.iter().copied().min().unwrap_or(0);
        let max = rounds.iter().copied().max().unwrap_or(0);
        let mut histogram = Self {
            min,
            max,
            counts: vec![0; bins],
        };
        for &r in rounds {
            let bin = histogram.bin_of(r);
            histogram.counts[bin] += 1;
        }
        histogram
    }

    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Total number of values binned.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    fn width(&self) -> f64 {
        f64::from(self.max - self.min) / self.bins() as f64
    }

    fn bin_of(&self, value: u32) -> usize {
        if self.max == self.min {
            return 0;
        }
        // Exact: a value on an edge belongs to the bin starting there
        let offset = u64::from(value - self.min) * self.bins() as u64;
        let bin = (offset / u64::from(self.max - self.min)) as usize;
        bin.min(self.bins() - 1)
    }

    /// Lower and upper edge of bin `i`.
    #[must_use]
    pub fn edges(&self, i: usize) -> (f64, f64) {
        let low = f64::from(self.min) + self.width() * i as f64;
        (low, low + self.width())
    }

    /// One line per bin: range, a bar scaled to `width` columns, and the count.
    ///
    /// Non-empty bins always get at least one column.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let tallest = self.counts.iter().copied().max().unwrap_or(0);
        let mut out = String::new();

        for (i, &count) in self.counts.iter().enumerate() {
            let (low, high) = self.edges(i);
            let bar = if tallest == 0 || count == 0 {
                0
            } else {
                (count * width).div_ceil(tallest)
            };
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "{:>7.0} - {:<7.0} | {} {}",
                low,
                high,
                "#".repeat(bar),
                count
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binning() {
        let histogram = Histogram::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 5);

        assert_eq!(histogram.min, 0);
        assert_eq!(histogram.max, 10);
        // Bins of width 2; the maximum lands in the last bin
        assert_eq!(histogram.counts, vec![2, 2, 2, 2, 3]);
        assert_eq!(histogram.total(), 11);
        assert_eq!(histogram.edges(1), (2.0, 4.0));
    }

    #[test]
    fn test_value_on_bin_edge() {
        // 33 is exactly the lower edge of bin 30 when 0..=110 is split 100 ways
        let histogram = Histogram::new(&[0, 33, 110], 100);

        assert_eq!(histogram.counts[30], 1);
        assert_eq!(histogram.counts[29], 0);
        assert_eq!(histogram.counts[0], 1);
        assert_eq!(histogram.counts[99], 1);
    }

    #[test]
    fn test_single_value() {
        let histogram = Histogram::new(&[42, 42, 42], 10);
        assert_eq!(histogram.counts[0], 3);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_empty() {
        let histogram = Histogram::new(&[], 4);
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.render(10).lines().count(), 4);
    }

    #[test]
    fn test_render() {
        let histogram = Histogram::new(&[10, 10, 10, 10, 20], 2);
        let text = histogram.render(8);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("######## 4"));
        assert!(lines[1].ends_with("## 1"));
    }

    #[test]
    #[should_panic(expected = "at least 1 bin")]
    fn test_zero_bins() {
        let _ = Histogram::new(&[1, 2, 3], 0);
    }

    #[test]
    fn test_serialization() {
        let histogram = Histogram::new(&[3, 5, 8], 3);
        let json = serde_json::to_string(&histogram).unwrap();
        let deserialized: Histogram = serde_json::from_str(&json).unwrap();
        assert_eq!(histogram, deserialized);
    }
}
