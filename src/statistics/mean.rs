//! Running arithmetic mean

use crate::traits::Accumulator;

/// Running mean using Welford's incremental update
///
/// `mean += (x - mean) / n` is algebraically the same as
/// `(mean * (n - 1) + x) / n` but never forms the running sum, so it stays
/// accurate for long streams of large values.
///
/// # Example
///
/// ```
/// use streamstats::statistics::Mean;
/// use streamstats::traits::Accumulator;
///
/// let mut mean = Mean::new();
/// assert_eq!(mean.eval(), 0.0);
///
/// mean.extend([1.0, 2.0, 3.0, 4.0]);
/// assert!((mean.eval() - 2.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Mean {
    count: u64,
    mean: f64,
}

impl Mean {
    /// Create an empty mean
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all observations, reconstructed from the mean
    pub fn sum(&self) -> f64 {
        self.mean * self.count as f64
    }
}

impl Accumulator for Mean {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn update(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        self.count += 1;
        if self.count == 1 {
            self.mean = value;
            return;
        }
        self.mean += (value - self.mean) / self.count as f64;
    }

    /// The mean, 0 before the first observation
    fn eval(&self) -> f64 {
        self.mean
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
