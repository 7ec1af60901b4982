//! # coinflip-sim
//!
//! Monte-Carlo simulation of a coin-flip betting game.
//!
//! ## The game
//!
//! A player pays 250 to play. A (possibly biased) coin is flipped a fixed
//! number of times, and every run of `TAILS, TAILS, HEADS` in the sequence
//! pays 100. A cohort plays many games with distinct seeds and reports the
//! expected payout, the extremes, and the probability of losing money.
//!
//! ## Reproducibility
//!
//! Game `i` of cohort `c` with `n` games is seeded with `c * n + i` and
//! draws its flips from its own ChaCha8 stream. The same configuration
//! always yields the same payouts.
//!
//! ## Modules
//!
//! - `core`: flip outcomes, seeded RNG, configuration, errors
//! - `game`: a single game and the payout rule
//! - `cohort`: many games and their summary statistics
//! - `plot`: histogram sink and text renderer
//! - `runner`: the program entry used by the binary

pub mod cohort;
pub mod core;
pub mod game;
pub mod plot;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{game_seed, FlipRng, Outcome, SimError, SimResult, SimulationConfig};

pub use crate::game::{count_matches, payout_bounds, Game};

pub use crate::cohort::{Cohort, CohortSummary};

pub use crate::plot::{HistogramSink, TextHistogram};

pub use crate::runner::{run, RunError};
