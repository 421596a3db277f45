//! Input loop feeding a [`StatisticSet`]
//!
//! The driver reads whitespace-separated numbers from a [`BufRead`], passes
//! each one to every registered statistic, and writes one
//! `"<name> = <value>"` line per statistic once the input is exhausted.
//! Tokens are cut straight out of the reader's buffer; only a token split
//! across two reads is copied, so memory stays bounded by the longest token.
//!
//! ```text
//!            number
//!           ┌──────┐
//!           ▼      │
//!       ┌─────────┐│  end of stream   ┌──────┐
//!   ───►│ Reading ├┴─────────────────►│ Done │
//!       └────┬────┘                   └──────┘
//!            │ not a number           ┌────────┐
//!            └───────────────────────►│ Failed │
//!                                     └────────┘
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::statistics::{StatisticSet, Summary};

/// Error terminating a [`Driver`] run
#[derive(Debug, Error)]
pub enum DriverError {
    /// A token could not be read as a finite number
    #[error("Invalid input data")]
    MalformedInput {
        /// The offending token, lossily decoded
        token: String,
        /// 1-based index of the token in the stream
        position: u64,
    },
    /// Reading the input or writing the report failed
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Position of a [`Driver`] in its read loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Reading,
    Done,
    Failed,
}

/// Final results of a completed run
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Number of values consumed
    pub observations: u64,
    /// One entry per statistic, in registration order
    pub summaries: Vec<Summary>,
}

impl Report {
    /// Write one `"<name> = <value>"` line per statistic
    pub fn write_to<W: Write>(&self, mut output: W) -> io::Result<()> {
        write!(output, "{}", self)
    }

    /// Value of the statistic called `name`
    pub fn get(&self, name: &str) -> Option<f64> {
        self.summaries
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for summary in &self.summaries {
            writeln!(f, "{}", summary)?;
        }
        Ok(())
    }
}

/// Token separator: ASCII whitespace as classified by C `isspace`
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab.
pub fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b
}

/// Parse one token as an observation
///
/// Accepts Rust's `f64` syntax but rejects anything that is not finite, so
/// `inf`, `NaN` and overflowing literals such as `1e400` are malformed.
pub fn parse_value(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Single-pass reader owning the statistics it updates
#[derive(Debug)]
pub struct Driver {
    statistics: StatisticSet,
    state: State,
    observations: u64,
    /// Bytes of a token split across two reads
    carry: Vec<u8>,
}

impl Driver {
    pub fn new(statistics: StatisticSet) -> Self {
        Self {
            statistics,
            state: State::Reading,
            observations: 0,
            carry: Vec::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn statistics(&self) -> &StatisticSet {
        &self.statistics
    }

    /// Number of values consumed so far
    pub fn observations(&self) -> u64 {
        self.observations
    }

    /// Read `input` to the end, updating every statistic
    ///
    /// Returns the terminal state. A driver that already left
    /// [`State::Reading`] ignores further input.
    pub fn consume<R: BufRead>(&mut self, mut input: R) -> Result<State, DriverError> {
        if self.state != State::Reading {
            return Ok(self.state);
        }

        loop {
            let chunk = match input.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.state = State::Failed;
                    return Err(e.into());
                }
            };
            if chunk.is_empty() {
                break;
            }

            let len = chunk.len();
            let mut start = 0;
            for (i, &b) in chunk.iter().enumerate() {
                if !is_separator(b) {
                    continue;
                }
                if self.carry.is_empty() {
                    if start < i {
                        self.feed(&chunk[start..i])?;
                    }
                } else {
                    self.carry.extend_from_slice(&chunk[start..i]);
                    self.feed_carry()?;
                }
                start = i + 1;
            }
            // token cut by the chunk boundary
            self.carry.extend_from_slice(&chunk[start..]);
            input.consume(len);
        }

        if !self.carry.is_empty() {
            self.feed_carry()?;
        }

        self.state = State::Done;
        tracing::debug!(observations = self.observations, "input exhausted");
        Ok(self.state)
    }

    fn feed_carry(&mut self) -> Result<(), DriverError> {
        let token = std::mem::take(&mut self.carry);
        let result = self.feed(&token);
        self.carry = token;
        self.carry.clear();
        result
    }

    fn feed(&mut self, token: &[u8]) -> Result<(), DriverError> {
        let position = self.observations + 1;
        let value = std::str::from_utf8(token).ok().and_then(parse_value);

        match value {
            Some(value) => {
                tracing::trace!(position, value, "observation");
                self.statistics.update(value);
                self.observations = position;
                Ok(())
            }
            None => {
                self.state = State::Failed;
                let token = String::from_utf8_lossy(token).into_owned();
                tracing::debug!(position, %token, "malformed input");
                Err(DriverError::MalformedInput { token, position })
            }
        }
    }

    /// Current results, available once the input reached a clean end
    pub fn report(&self) -> Option<Report> {
        if self.state != State::Done {
            return None;
        }
        Some(self.summarize())
    }

    fn summarize(&self) -> Report {
        Report {
            observations: self.observations,
            summaries: self.statistics.summaries().collect(),
        }
    }

    /// Consume `input` and write the report to `output`
    ///
    /// Nothing is written when the input is malformed.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        input: R,
        mut output: W,
    ) -> Result<Report, DriverError> {
        self.consume(input)?;

        let report = self.summarize();
        report.write_to(&mut output)?;
        output.flush()?;

        Ok(report)
    }
}
