//! Simulation parameters.

use serde::{Deserialize, Serialize};

/// Parameters for one cohort run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Cohort identity. Combined with the game index to seed each game.
    pub cohort_id: u64,

    /// Number of games in the cohort.
    pub game_count: usize,

    /// Coin flips per game.
    pub flip_count: usize,

    /// Probability that a single flip lands heads, in [0, 1].
    pub heads_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cohort_id: 1,
            game_count: 1000,
            flip_count: 20,
            heads_probability: 0.5,
        }
    }
}

impl SimulationConfig {
    /// Set the cohort identity.
    pub fn with_cohort_id(mut self, id: u64) -> Self {
        self.cohort_id = id;
        self
    }

    /// Set the number of games.
    pub fn with_game_count(mut self, count: usize) -> Self {
        self.game_count = count;
        self
    }

    /// Set the flips per game.
    pub fn with_flip_count(mut self, count: usize) -> Self {
        self.flip_count = count;
        self
    }

    /// Set the heads probability.
    pub fn with_heads_probability(mut self, p: f64) -> Self {
        self.heads_probability = p;
        self
    }
}
