//! Cohort driver: build the games, play them in order, aggregate payouts.

use tracing::{debug, info, trace};

use crate::core::{game_seed, SimError, SimResult, SimulationConfig};
use crate::game::Game;

use super::summary::CohortSummary;

/// A batch of independently seeded games.
#[derive(Clone, Debug)]
pub struct Cohort {
    id: u64,
    games: Vec<Game>,
    payouts: Vec<i64>,
    simulated: bool,
}

impl Cohort {
    /// Build `game_count` games, game `i` seeded with
    /// `id * game_count + i`. Nothing is played yet.
    pub fn new(id: u64, game_count: usize, heads_probability: f64) -> SimResult<Self> {
        let games = (0..game_count)
            .map(|index| Game::new(game_seed(id, game_count, index), heads_probability))
            .collect::<SimResult<Vec<_>>>()?;

        debug!(cohort = id, games = game_count, heads_probability, "cohort built");

        Ok(Self {
            id,
            games,
            payouts: Vec::with_capacity(game_count),
            simulated: false,
        })
    }

    /// Build a cohort from a [`SimulationConfig`].
    pub fn from_config(config: &SimulationConfig) -> SimResult<Self> {
        Self::new(config.cohort_id, config.game_count, config.heads_probability)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of games in the cohort.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    /// Play every game with `flip_count` flips and record its payout.
    ///
    /// `payouts()[i]` belongs to `games()[i]`. A cohort is played once; a
    /// second call fails with [`SimError::AlreadySimulated`].
    pub fn simulate(&mut self, flip_count: usize) -> SimResult<()> {
        if self.simulated {
            return Err(SimError::AlreadySimulated("cohort"));
        }

        for game in &mut self.games {
            game.simulate(flip_count)?;
            let payout = game.payout();
            trace!(game = game.identity(), payout, "game settled");
            self.payouts.push(payout);
        }
        self.simulated = true;

        info!(cohort = self.id, games = self.games.len(), flip_count, "cohort simulated");
        Ok(())
    }

    /// Payouts in game order. Empty until [`simulate`](Self::simulate) runs.
    pub fn payouts(&self) -> &[i64] {
        &self.payouts
    }

    /// Largest payout.
    pub fn max(&self) -> SimResult<i64> {
        self.payouts.iter().copied().max().ok_or(SimError::EmptyAggregation)
    }

    /// Smallest payout.
    pub fn min(&self) -> SimResult<i64> {
        self.payouts.iter().copied().min().ok_or(SimError::EmptyAggregation)
    }

    /// Mean payout.
    pub fn expected_value(&self) -> SimResult<f64> {
        if self.payouts.is_empty() {
            return Err(SimError::EmptyAggregation);
        }
        let total: i64 = self.payouts.iter().sum();
        Ok(total as f64 / self.payouts.len() as f64)
    }

    /// Share of games that lost money.
    ///
    /// Divides by the number of games in the cohort, not the number of
    /// payouts recorded.
    pub fn probability_of_loss(&self) -> SimResult<f64> {
        if self.payouts.is_empty() {
            return Err(SimError::EmptyAggregation);
        }
        let losses = self.payouts.iter().filter(|&&p| p < 0).count();
        Ok(losses as f64 / self.games.len() as f64)
    }

    /// All summary statistics at once.
    pub fn summary(&self) -> SimResult<CohortSummary> {
        Ok(CohortSummary {
            games: self.games.len(),
            expected_value: self.expected_value()?,
            max: self.max()?,
            min: self.min()?,
            probability_of_loss: self.probability_of_loss()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cohort_is_unplayed() {
        let cohort = Cohort::new(1, 10, 0.5).unwrap();
        assert_eq!(cohort.len(), 10);
        assert!(!cohort.is_simulated());
        assert!(cohort.payouts().is_empty());
    }

    #[test]
    fn test_game_identities_follow_seed_formula() {
        let cohort = Cohort::new(3, 4, 0.5).unwrap();
        let ids: Vec<_> = cohort.games().iter().map(Game::identity).collect();
        assert_eq!(ids, vec![12, 13, 14, 15]);
    }

    #[test]
    fn test_rejects_bad_probability() {
        assert_eq!(Cohort::new(1, 5, 2.0).unwrap_err(), SimError::InvalidProbability(2.0));
    }

    #[test]
    fn test_empty_aggregation() {
        let cohort = Cohort::new(1, 10, 0.5).unwrap();
        assert_eq!(cohort.max(), Err(SimError::EmptyAggregation));
        assert_eq!(cohort.min(), Err(SimError::EmptyAggregation));
        assert_eq!(cohort.expected_value(), Err(SimError::EmptyAggregation));
        assert_eq!(cohort.probability_of_loss(), Err(SimError::EmptyAggregation));
        assert_eq!(cohort.summary(), Err(SimError::EmptyAggregation));
    }

    #[test]
    fn test_zero_games_stays_empty() {
        let mut cohort = Cohort::new(1, 0, 0.5).unwrap();
        assert!(cohort.is_empty());
        cohort.simulate(20).unwrap();
        assert_eq!(cohort.expected_value(), Err(SimError::EmptyAggregation));
    }

    #[test]
    fn test_payouts_match_games() {
        let mut cohort = Cohort::new(2, 25, 0.5).unwrap();
        cohort.simulate(12).unwrap();

        assert_eq!(cohort.payouts().len(), 25);
        for (game, &payout) in cohort.games().iter().zip(cohort.payouts()) {
            assert_eq!(game.flips().len(), 12);
            assert_eq!(game.payout(), payout);
        }
    }

    #[test]
    fn test_simulate_twice_is_rejected() {
        let mut cohort = Cohort::new(1, 5, 0.5).unwrap();
        cohort.simulate(6).unwrap();
        assert_eq!(cohort.simulate(6), Err(SimError::AlreadySimulated("cohort")));
        assert_eq!(cohort.payouts().len(), 5);
    }

    #[test]
    fn test_all_tails_loses_every_game() {
        let mut cohort = Cohort::new(1, 20, 0.0).unwrap();
        cohort.simulate(20).unwrap();

        assert_eq!(cohort.max(), Ok(-250));
        assert_eq!(cohort.min(), Ok(-250));
        assert_eq!(cohort.expected_value(), Ok(-250.0));
        assert_eq!(cohort.probability_of_loss(), Ok(1.0));
    }
}
