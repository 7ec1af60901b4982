//! Core types: flip outcomes, the seeded flip stream, configuration, errors.
//!
//! Games and cohorts are built on top of these; nothing here knows about
//! payouts.

pub mod config;
pub mod error;
pub mod outcome;
pub mod rng;

pub use config::SimulationConfig;
pub use error::{SimError, SimResult};
pub use outcome::Outcome;
pub use rng::{game_seed, FlipRng};
