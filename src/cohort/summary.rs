//! Summary statistics of a played cohort.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregated payout statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CohortSummary {
    /// Games in the cohort.
    pub games: usize,

    /// Mean payout.
    pub expected_value: f64,

    /// Best payout.
    pub max: i64,

    /// Worst payout.
    pub min: i64,

    /// Fraction of games with a negative payout.
    pub probability_of_loss: f64,
}

impl fmt::Display for CohortSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expected payout over {} games: {}", self.games, self.expected_value)?;
        writeln!(f, "The maximum reward is {}", self.max)?;
        writeln!(f, "The minimum reward is {}", self.min)?;
        write!(f, "The probability of a loss in this game is {}", self.probability_of_loss)
    }
}
