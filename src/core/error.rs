use thiserror::Error;

/// Caller errors raised by games and cohorts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("heads probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("simulate was already called on this {0}")]
    AlreadySimulated(&'static str),

    #[error("no payouts to aggregate: simulate has not run or the cohort is empty")]
    EmptyAggregation,
}

pub type SimResult<T> = std::result::Result<T, SimError>;
