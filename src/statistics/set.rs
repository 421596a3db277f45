//! The closed set of statistics the driver reports
//!
//! [`Statistic`] tags each accumulator variant so a [`StatisticSet`] can hold
//! them in one fixed, ordered collection without trait objects.

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use core::fmt;
use core::str::FromStr;

use super::{HistoryStdDev, Max, Mean, Min, StdDev};
use crate::traits::Accumulator;

/// Algorithm used for the standard deviation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StdMethod {
    /// Welford's online variance, O(1) per update
    #[default]
    Welford,
    /// Recompute from the retained history, O(n) per update
    History,
}

impl StdMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            StdMethod::Welford => "welford",
            StdMethod::History => "history",
        }
    }
}

impl fmt::Display for StdMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`StdMethod`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown standard deviation method `{0}` (expected `welford` or `history`)")]
pub struct ParseStdMethodError(pub(crate) String);

impl FromStr for StdMethod {
    type Err = ParseStdMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welford" => Ok(StdMethod::Welford),
            "history" => Ok(StdMethod::History),
            other => Err(ParseStdMethodError(other.to_string())),
        }
    }
}

/// One accumulator of the closed statistic family
#[derive(Clone, Debug)]
pub enum Statistic {
    Min(Min),
    Max(Max),
    Mean(Mean),
    StdDev(StdDev),
    HistoryStdDev(HistoryStdDev),
}

impl Statistic {
    /// Standard deviation accumulator for the given method
    pub fn std_dev(method: StdMethod) -> Self {
        match method {
            StdMethod::Welford => Statistic::StdDev(StdDev::new()),
            StdMethod::History => Statistic::HistoryStdDev(HistoryStdDev::new()),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $acc:ident => $body:expr) => {
        match $self {
            Statistic::Min($acc) => $body,
            Statistic::Max($acc) => $body,
            Statistic::Mean($acc) => $body,
            Statistic::StdDev($acc) => $body,
            Statistic::HistoryStdDev($acc) => $body,
        }
    };
}

impl Accumulator for Statistic {
    fn name(&self) -> &'static str {
        dispatch!(self, acc => acc.name())
    }

    fn update(&mut self, value: f64) {
        dispatch!(self, acc => acc.update(value))
    }

    fn eval(&self) -> f64 {
        dispatch!(self, acc => acc.eval())
    }

    fn clear(&mut self) {
        dispatch!(self, acc => acc.clear())
    }

    fn size_bytes(&self) -> usize {
        dispatch!(self, acc => acc.size_bytes())
    }

    fn count(&self) -> u64 {
        dispatch!(self, acc => acc.count())
    }
}

/// A named result of one statistic
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub name: &'static str,
    pub value: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Ordered collection of statistics updated together
///
/// Values reach every statistic in registration order, and results are
/// reported in the same order.
///
/// # Example
///
/// ```
/// use streamstats::statistics::StatisticSet;
///
/// let mut set = StatisticSet::standard();
/// set.extend((0..=10).map(f64::from));
///
/// let lines: Vec<String> = set.summaries().map(|s| s.to_string()).collect();
/// assert_eq!(lines[0], "min = 0");
/// assert_eq!(lines[1], "max = 10");
/// assert_eq!(lines[2], "mean = 5");
/// assert!(lines[3].starts_with("std = 3.1622"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StatisticSet {
    statistics: Vec<Statistic>,
}

impl StatisticSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// `min`, `max`, `mean` and Welford `std`, in that order
    pub fn standard() -> Self {
        Self::with_std_method(StdMethod::Welford)
    }

    /// `min`, `max`, `mean` and `std` using `method`
    pub fn with_std_method(method: StdMethod) -> Self {
        let mut set = Self::new();
        set.register(Statistic::Min(Min::new()))
            .register(Statistic::Max(Max::new()))
            .register(Statistic::Mean(Mean::new()))
            .register(Statistic::std_dev(method));
        set
    }

    /// Append a statistic after the ones already registered
    pub fn register(&mut self, statistic: Statistic) -> &mut Self {
        self.statistics.push(statistic);
        self
    }

    /// Feed one observation to every statistic
    pub fn update(&mut self, value: f64) {
        for statistic in &mut self.statistics {
            statistic.update(value);
        }
    }

    /// Feed every value of an iterator, in order
    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.update(value);
        }
    }

    /// Results in registration order
    pub fn summaries(&self) -> impl Iterator<Item = Summary> + '_ {
        self.statistics.iter().map(|s| Summary {
            name: s.name(),
            value: s.eval(),
        })
    }

    /// Look up a statistic by name
    pub fn get(&self, name: &str) -> Option<&Statistic> {
        self.statistics.iter().find(|s| s.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statistic> {
        self.statistics.iter()
    }

    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }

    /// Reset every statistic, keeping the registrations
    pub fn clear(&mut self) {
        for statistic in &mut self.statistics {
            statistic.clear();
        }
    }

    /// Memory usage in bytes
    pub fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.statistics.iter().map(|s| s.size_bytes()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order() {
        let set = StatisticSet::standard();
        let names: Vec<&str> = set.iter().map(|s| s.name()).collect();

        assert_eq!(names, ["min", "max", "mean", "std"]);
    }

    #[test]
    fn test_std_method_selects_variant() {
        let welford = StatisticSet::with_std_method(StdMethod::Welford);
        let history = StatisticSet::with_std_method(StdMethod::History);

        assert!(matches!(welford.get("std"), Some(Statistic::StdDev(_))));
        assert!(matches!(history.get("std"), Some(Statistic::HistoryStdDev(_))));
    }

    #[test]
    fn test_single_value() {
        let mut set = StatisticSet::standard();
        set.update(-2.5);

        let values: Vec<f64> = set.summaries().map(|s| s.value).collect();
        assert_eq!(values, [-2.5, -2.5, -2.5, 0.0]);
    }

    #[test]
    fn test_empty_defaults() {
        let set = StatisticSet::standard();
        let summaries: Vec<Summary> = set.summaries().collect();

        assert!(summaries[0].value.is_nan());
        assert!(summaries[1].value.is_nan());
        assert_eq!(summaries[2].value, 0.0);
        assert_eq!(summaries[3].value, 0.0);
    }

    #[test]
    fn test_summary_display() {
        let summary = Summary {
            name: "mean",
            value: 2.5,
        };
        assert_eq!(summary.to_string(), "mean = 2.5");

        let empty = Summary {
            name: "min",
            value: f64::NAN,
        };
        assert_eq!(empty.to_string(), "min = NaN");
    }

    #[test]
    fn test_methods_agree() {
        let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];

        let mut welford = StatisticSet::with_std_method(StdMethod::Welford);
        let mut history = StatisticSet::with_std_method(StdMethod::History);
        welford.extend(data);
        history.extend(data);

        for (a, b) in welford.summaries().zip(history.summaries()) {
            assert_eq!(a.name, b.name);
            assert!((a.value - b.value).abs() < 1e-9, "{}: {} vs {}", a.name, a.value, b.value);
        }
    }

    #[test]
    fn test_std_method_parse() {
        assert_eq!("welford".parse::<StdMethod>(), Ok(StdMethod::Welford));
        assert_eq!("history".parse::<StdMethod>(), Ok(StdMethod::History));
        assert!("batch".parse::<StdMethod>().is_err());
        assert_eq!(StdMethod::History.to_string(), "history");
    }

    #[test]
    fn test_clear_keeps_registrations() {
        let mut set = StatisticSet::standard();
        set.extend([1.0, 2.0]);
        set.clear();

        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|s| s.is_empty()));
    }
}
