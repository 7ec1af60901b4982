//! Program entry: run one cohort, print the report, plot the payouts.

use std::io::Write;

use thiserror::Error;

use crate::cohort::{Cohort, CohortSummary};
use crate::core::{SimError, SimulationConfig};
use crate::game::payout_bounds;
use crate::plot::HistogramSink;

pub const HISTOGRAM_TITLE: &str = "Histogram of Payouts";
pub const HISTOGRAM_X_LABEL: &str = "Payouts ($)";
pub const HISTOGRAM_Y_LABEL: &str = "Number of games";

/// Failures surfaced by [`run`].
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Simulation(#[from] SimError),

    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Simulate the cohort described by `config`, write the report to `out`
/// and hand the payouts to `sink`.
pub fn run<W, S>(config: &SimulationConfig, out: &mut W, sink: &mut S) -> Result<CohortSummary, RunError>
where
    W: Write,
    S: HistogramSink + ?Sized,
{
    let mut cohort = Cohort::from_config(config)?;
    cohort.simulate(config.flip_count)?;
    let summary = cohort.summary()?;

    let (lowest, highest) = payout_bounds(config.flip_count);
    writeln!(out, "{summary}")?;
    writeln!(
        out,
        "The minimum and maximum possible rewards are {lowest} and {highest}, respectively"
    )?;

    let observations: Vec<f64> = cohort.payouts().iter().map(|&p| p as f64).collect();
    sink.render_histogram(&observations, HISTOGRAM_TITLE, HISTOGRAM_X_LABEL, HISTOGRAM_Y_LABEL)?;

    Ok(summary)
}
