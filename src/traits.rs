//! Core traits for online statistics
//!
//! Every statistic implements [`Accumulator`]: it consumes one value at a time
//! and can report its result over everything seen so far, without replaying
//! the stream.

use core::fmt::Debug;

/// Core trait for all streaming accumulators
pub trait Accumulator: Clone + Debug {
    /// Short name used when reporting, e.g. `"min"`
    fn name(&self) -> &'static str;

    /// Feed one observation
    ///
    /// NaN observations are ignored and do not count towards [`count`](Accumulator::count).
    fn update(&mut self, value: f64);

    /// Current result over all accepted observations
    ///
    /// Each accumulator documents the value it returns before the first update.
    fn eval(&self) -> f64;

    /// Reset to the empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of observations accepted
    fn count(&self) -> u64;

    /// Check if no observation was accepted yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Feed every value of an iterator, in order
    fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.update(value);
        }
    }
}
