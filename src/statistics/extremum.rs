//! Running minimum and maximum
//!
//! Both accumulators take the first accepted observation as their baseline, so
//! no numeric sentinel can ever be reported as an extremum.

use crate::traits::Accumulator;

/// Running minimum
///
/// # Example
///
/// ```
/// use streamstats::statistics::Min;
/// use streamstats::traits::Accumulator;
///
/// let mut min = Min::new();
/// assert!(min.eval().is_nan());
///
/// min.extend([3.0, -1.5, 2.0]);
/// assert_eq!(min.eval(), -1.5);
/// assert_eq!(min.value(), Some(-1.5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Min {
    count: u64,
    min: f64,
}

impl Min {
    /// Create an empty minimum
    pub fn new() -> Self {
        Self::default()
    }

    /// The minimum, or `None` before the first observation
    pub fn value(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }
}

impl Accumulator for Min {
    fn name(&self) -> &'static str {
        "min"
    }

    fn update(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        if self.count == 0 || value < self.min {
            self.min = value;
        }
        self.count += 1;
    }

    /// The minimum, NaN before the first observation
    fn eval(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
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

/// Running maximum
///
/// # Example
///
/// ```
/// use streamstats::statistics::Max;
/// use streamstats::traits::Accumulator;
///
/// let mut max = Max::new();
/// max.extend([-3.0, -1.5, -2.0]);
/// assert_eq!(max.eval(), -1.5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Max {
    count: u64,
    max: f64,
}

impl Max {
    /// Create an empty maximum
    pub fn new() -> Self {
        Self::default()
    }

    /// The maximum, or `None` before the first observation
    pub fn value(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }
}

impl Accumulator for Max {
    fn name(&self) -> &'static str {
        "max"
    }

    fn update(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }

        if self.count == 0 || value > self.max {
            self.max = value;
        }
        self.count += 1;
    }

    /// The maximum, NaN before the first observation
    fn eval(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
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
