//! Cohorts: many games played with distinct seeds, then aggregated.
//!
//! ## Usage
//!
//! ```rust
//! use coinflip_sim::cohort::Cohort;
//!
//! let mut cohort = Cohort::new(1, 100, 0.5).unwrap();
//! cohort.simulate(20).unwrap();
//!
//! let summary = cohort.summary().unwrap();
//! assert!(summary.max as f64 >= summary.expected_value);
//! assert!(summary.expected_value >= summary.min as f64);
//! ```

mod simulation;
mod summary;

pub use simulation::Cohort;
pub use summary::CohortSummary;
