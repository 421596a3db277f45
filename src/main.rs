//! streamstats
//!
//! Reads whitespace-separated numbers from standard input and prints their
//! minimum, maximum, mean and population standard deviation.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use streamstats::driver::{Driver, DriverError};
use streamstats::statistics::{StatisticSet, StdMethod};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log every observation and the per-update diagnostics of the history method
    #[arg(short, long)]
    verbose: bool,

    /// Standard deviation algorithm: `welford` or `history`
    #[arg(long, value_name = "METHOD", default_value_t = StdMethod::Welford)]
    std_method: StdMethod,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    tracing::debug!(std_method = %args.std_method, "starting");

    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());
    let driver = Driver::new(StatisticSet::with_std_method(args.std_method));

    match driver.run(input, output) {
        Ok(report) => {
            tracing::debug!(observations = report.observations, "done");
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ DriverError::MalformedInput { .. }) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("failed to process standard input"),
    }
}
