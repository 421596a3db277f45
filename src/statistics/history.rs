//! Standard deviation recomputed from the full history
//!
//! Retains every observation and rebuilds all squared deviations on each
//! update: O(n) per update, O(n²) for the whole stream. Only useful to check
//! [`StdDev`](super::StdDev) against a direct recomputation.

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::math;
use crate::traits::Accumulator;

/// Population standard deviation over a retained history
///
/// # Example
///
/// ```
/// use streamstats::statistics::HistoryStdDev;
/// use streamstats::traits::Accumulator;
///
/// let mut std = HistoryStdDev::new();
/// std.extend([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
///
/// assert!((std.eval() - 2.0).abs() < 1e-12);
/// assert_eq!(std.history().len(), 8);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HistoryStdDev {
    mean: f64,
    history: Vec<f64>,
    squared_deviations: Vec<f64>,
    stddev: f64,
}

impl HistoryStdDev {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every observation accepted so far, in arrival order
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Squared deviations of the history from the current mean
    pub fn squared_deviations(&self) -> &[f64] {
        &self.squared_deviations
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl Accumulator for HistoryStdDev {
    fn name(&self) -> &'static str {
        "std"
    }

    fn update(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        let seen = self.history.len() as f64;
        self.mean = if self.history.is_empty() {
            value
        } else {
            (self.mean * seen + value) / (seen + 1.0)
        };
        self.history.push(value);

        let mean = self.mean;
        self.squared_deviations.clear();
        self.squared_deviations
            .extend(self.history.iter().map(|x| (x - mean) * (x - mean)));

        let n = self.squared_deviations.len() as f64;
        let variance = self.squared_deviations.iter().sum::<f64>() / n;
        self.stddev = math::sqrt(variance);

        tracing::trace!(
            observations = self.history.len(),
            squared_deviations = ?self.squared_deviations,
            "recomputed squared deviations"
        );
    }

    /// Population standard deviation, 0 before the first observation
    fn eval(&self) -> f64 {
        self.stddev
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + (self.history.capacity() + self.squared_deviations.capacity())
                * core::mem::size_of::<f64>()
    }

    fn count(&self) -> u64 {
        self.history.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::StdDev;

    #[test]
    fn test_empty() {
        let std = HistoryStdDev::new();

        assert!(std.is_empty());
        assert_eq!(std.eval(), 0.0);
        assert!(std.squared_deviations().is_empty());
    }

    #[test]
    fn test_single_value() {
        let mut std = HistoryStdDev::new();
        std.update(-3.5);

        assert_eq!(std.mean(), -3.5);
        assert_eq!(std.eval(), 0.0);
        assert_eq!(std.squared_deviations(), &[0.0]);
    }

    #[test]
    fn test_deviations_rebuilt_from_current_mean() {
        let mut std = HistoryStdDev::new();
        std.update(1.0);
        std.update(3.0);

        assert_eq!(std.mean(), 2.0);
        assert_eq!(std.squared_deviations(), &[1.0, 1.0]);

        std.update(8.0);

        // mean is now 4
        assert_eq!(std.squared_deviations(), &[9.0, 1.0, 16.0]);
        assert!((std.eval() - (26.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_averages_exactly_n_entries() {
        let mut std = HistoryStdDev::new();
        std.extend((0..=10).map(f64::from));

        assert_eq!(std.squared_deviations().len(), 11);
        assert!((std.eval() - 10.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_agrees_with_welford() {
        let data = [1.5, 3.7, 2.1, 8.9, 4.3, 6.2, 7.4, 0.5, 9.1, 5.6];

        let mut history = HistoryStdDev::new();
        let mut welford = StdDev::new();
        for &v in &data {
            history.update(v);
            welford.update(v);
            assert!((history.eval() - welford.eval()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_memory_grows_with_history() {
        let mut std = HistoryStdDev::new();
        let initial = std.size_bytes();

        std.extend((0..1000).map(f64::from));

        assert!(std.size_bytes() >= initial + 2 * 1000 * core::mem::size_of::<f64>());
    }

    #[test]
    fn test_clear() {
        let mut std = HistoryStdDev::new();
        std.extend([1.0, 2.0, 3.0]);
        std.clear();

        assert!(std.is_empty());
        assert!(std.history().is_empty());
        assert_eq!(std.eval(), 0.0);
    }
}
