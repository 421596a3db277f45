//! # Streamstats
//!
//! Online summary statistics over a stream of numbers.
//!
//! Streamstats computes the minimum, maximum, arithmetic mean and population
//! standard deviation of a sequence of `f64` values, one value at a time,
//! without retaining the input.
//!
//! ## Features
//!
//! - **Extrema**: [`Min`] and [`Max`] baselined on the first observation
//! - **Mean**: incremental [`Mean`]
//! - **Standard deviation**: Welford's online [`StdDev`], plus the O(n²)
//!   [`HistoryStdDev`] for cross-checking
//! - **Driver**: reads whitespace-separated numbers from any `BufRead` and
//!   reports every statistic in a fixed order
//!
//! ## Quick Start
//!
//! ```rust
//! use streamstats::prelude::*;
//!
//! let mut set = StatisticSet::standard();
//! for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     set.update(value);
//! }
//!
//! for summary in set.summaries() {
//!     println!("{}", summary);
//! }
//! ```
//!
//! ## Reading a Stream
//!
//! ```rust
//! use streamstats::driver::Driver;
//! use streamstats::statistics::StatisticSet;
//!
//! let input = "0 1 2 3 4\n5 6 7 8 9 10\n";
//! let mut output = Vec::new();
//!
//! let report = Driver::new(StatisticSet::standard())
//!     .run(input.as_bytes(), &mut output)
//!     .unwrap();
//!
//! assert_eq!(report.observations, 11);
//! assert!(String::from_utf8(output).unwrap().starts_with("min = 0\nmax = 10\nmean = 5\n"));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support and the [`driver`] module
//! - `cli` (default): The `streamstats` binary

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod math;

// Core traits always available
pub mod traits;

pub mod statistics;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod driver;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::statistics::{
        HistoryStdDev, Max, Mean, Min, Statistic, StatisticSet, StdDev, StdMethod, Summary,
    };

    #[cfg(feature = "std")]
    pub use crate::driver::{Driver, DriverError, Report};
}

pub use statistics::{HistoryStdDev, Max, Mean, Min, StatisticSet, StdDev};
