//! A single played game: flip a coin `n` times, then settle the payout.

use rand::distributions::Bernoulli;
use smallvec::SmallVec;

use crate::core::{FlipRng, Outcome, SimError, SimResult};

use super::pattern::{count_matches, payout_for};

/// Flips stored inline; the default game length fits without allocating.
pub type FlipSequence = SmallVec<[Outcome; 32]>;

/// One game with its own seeded flip stream.
#[derive(Clone, Debug)]
pub struct Game {
    identity: u64,
    heads_probability: f64,
    coin: Bernoulli,
    rng: FlipRng,
    flips: FlipSequence,
    simulated: bool,
}

impl Game {
    /// Create a game whose flips are seeded from `identity`.
    ///
    /// Fails with [`SimError::InvalidProbability`] unless
    /// `heads_probability` lies in `[0, 1]`.
    pub fn new(identity: u64, heads_probability: f64) -> SimResult<Self> {
        let coin = Bernoulli::new(heads_probability)
            .map_err(|_| SimError::InvalidProbability(heads_probability))?;

        Ok(Self {
            identity,
            heads_probability,
            coin,
            rng: FlipRng::new(identity),
            flips: FlipSequence::new(),
            simulated: false,
        })
    }

    pub fn identity(&self) -> u64 {
        self.identity
    }

    pub fn heads_probability(&self) -> f64 {
        self.heads_probability
    }

    /// Flips drawn so far, in draw order.
    pub fn flips(&self) -> &[Outcome] {
        &self.flips
    }

    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    /// Draw `flip_count` flips.
    ///
    /// A game is played once; a second call fails with
    /// [`SimError::AlreadySimulated`] and leaves the flips untouched.
    pub fn simulate(&mut self, flip_count: usize) -> SimResult<()> {
        if self.simulated {
            return Err(SimError::AlreadySimulated("game"));
        }

        self.flips.reserve(flip_count);
        for _ in 0..flip_count {
            let outcome = self.rng.flip(&self.coin);
            self.flips.push(outcome);
        }
        self.simulated = true;
        Ok(())
    }

    /// Number of `T, T, H` runs in the flips.
    pub fn match_count(&self) -> usize {
        count_matches(&self.flips)
    }

    /// Entry cost plus the bonus for every match.
    pub fn payout(&self) -> i64 {
        payout_for(self.match_count())
    }
}
