//! Running standard deviation
//!
//! Computes the population standard deviation using Welford's numerically
//! stable online algorithm.

use crate::math;
use crate::traits::Accumulator;

/// Standard deviation calculator using Welford's algorithm
///
/// Keeps the count, the running mean and the sum of squared deviations from
/// the mean (M2), so every update is O(1) in time and memory.
///
/// # Example
///
/// ```
/// use streamstats::statistics::StdDev;
/// use streamstats::traits::Accumulator;
///
/// let mut std = StdDev::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     std.update(value);
/// }
///
/// assert!((std.mean() - 5.0).abs() < 0.001);
/// assert!((std.variance() - 4.0).abs() < 0.001);
/// assert!((std.eval() - 2.0).abs() < 0.001);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StdDev {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
}

impl StdDev {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the running mean
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Get the population variance
    ///
    /// This is the variance assuming the data represents the entire population.
    /// Use `sample_variance()` if the data is a sample.
    pub fn variance(&self) -> f64 {
        if self.count < 1 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }

    /// Get the sample variance
    ///
    /// This is the unbiased variance estimator (Bessel's correction).
    /// Use `variance()` for population variance.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// Get the population standard deviation
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }

    /// Get the sample standard deviation
    pub fn sample_stddev(&self) -> f64 {
        math::sqrt(self.sample_variance())
    }
}

impl Accumulator for StdDev {
    fn name(&self) -> &'static str {
        "std"
    }

    fn update(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    /// Population standard deviation, 0 before the first observation
    fn eval(&self) -> f64 {
        self.stddev()
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}
