//! Running weighted averages.

use serde::{Deserialize, Serialize};

/// A running weighted-average accumulator.
///
/// Values are folded in one at a time (optionally with a weight) and the
/// mean can be read at any point. Two accumulators merge by weighting each
/// side with its own observation count, so per-fold means combine into the
/// overall mean without revisiting any sample.
///
/// # Examples
///
/// ```
/// use tanager::eval::mean::Mean;
///
/// let mut accuracy = Mean::new();
/// accuracy.add(1.0);
/// accuracy.add(0.0);
/// accuracy.add(1.0);
/// assert!((accuracy.value() - 2.0 / 3.0).abs() < 1e-9);
/// assert_eq!(accuracy.count(), 3);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mean {
    sum: f64,
    count: u64,
}

impl Mean {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Mean::default()
    }

    /// Add a value with weight 1.
    pub fn add(&mut self, value: f64) {
        self.add_weighted(value, 1);
    }

    /// Add a value observed `count` times.
    pub fn add_weighted(&mut self, value: f64, count: u64) {
        self.sum += value * count as f64;
        self.count += count;
    }

    /// The mean of everything added so far, 0 while empty.
    pub fn value(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Number of observations folded in, for weighting further merges.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &Mean) {
        self.add_weighted(other.value(), other.count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mean_is_zero() {
        let mean = Mean::new();
        assert_eq!(mean.value(), 0.0);
        assert_eq!(mean.count(), 0);
    }

    #[test]
    fn test_weighted_add() {
        let mut mean = Mean::new();
        mean.add_weighted(0.5, 10);
        mean.add_weighted(1.0, 30);
        assert!((mean.value() - 0.875).abs() < 1e-9);
        assert_eq!(mean.count(), 40);
    }

    #[test]
    fn test_merge_matches_sequential() {
        let mut sequential = Mean::new();
        for v in [0.2, 0.4, 0.9, 1.0, 0.0] {
            sequential.add(v);
        }

        let mut left = Mean::new();
        left.add(0.2);
        left.add(0.4);
        let mut right = Mean::new();
        right.add(0.9);
        right.add(1.0);
        right.add(0.0);

        let mut merged = left.clone();
        merged.merge(&right);

        assert!((merged.value() - sequential.value()).abs() < 1e-9);
        assert_eq!(merged.count(), sequential.count());
    }
}
