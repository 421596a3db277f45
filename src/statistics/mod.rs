//! Statistical summaries for streaming data
//!
//! This module provides accumulators that compute statistics over streams
//! in a single pass with constant memory. [`HistoryStdDev`] is the one
//! exception: it keeps every observation.
//!
//! # Algorithms
//!
//! - [`Min`] / [`Max`]: running extrema, baselined on the first observation
//! - [`Mean`]: incremental arithmetic mean
//! - [`StdDev`]: population standard deviation using Welford's algorithm
//! - [`HistoryStdDev`]: population standard deviation recomputed from the
//!   full history on every update
//!
//! # Example
//!
//! ```
//! use streamstats::statistics::{Max, Min, StdDev};
//! use streamstats::traits::Accumulator;
//!
//! let mut min = Min::new();
//! let mut max = Max::new();
//! let mut std = StdDev::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     min.update(value);
//!     max.update(value);
//!     std.update(value);
//! }
//!
//! println!("Min: {}", min.eval());
//! println!("Max: {}", max.eval());
//! println!("Stddev: {}", std.eval());
//! ```

mod extremum;
mod history;
mod mean;
mod set;
mod stddev;

pub use extremum::{Max, Min};
pub use history::HistoryStdDev;
pub use mean::Mean;
pub use set::{ParseStdMethodError, Statistic, StatisticSet, StdMethod, Summary};
pub use stddev::StdDev;
