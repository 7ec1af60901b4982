//! Deterministic coin-flip stream, one per game.
//!
//! ## Seeding
//!
//! Every game owns its own [`FlipRng`], seeded with
//! `cohort_id * game_count + index` (see [`game_seed`]). The same seed always
//! produces the same flips, so a cohort can be replayed exactly.
//!
//! ```
//! use coinflip_sim::core::{FlipRng, Outcome};
//! use rand::distributions::Bernoulli;
//!
//! let coin = Bernoulli::new(0.5).unwrap();
//! let mut a = FlipRng::new(7);
//! let mut b = FlipRng::new(7);
//!
//! let xs: Vec<Outcome> = (0..20).map(|_| a.flip(&coin)).collect();
//! let ys: Vec<Outcome> = (0..20).map(|_| b.flip(&coin)).collect();
//! assert_eq!(xs, ys);
//! ```

use rand::distributions::{Bernoulli, Distribution};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::outcome::Outcome;

/// Derive the seed of game `index` in cohort `cohort_id`.
///
/// Two cohorts of the same size never share a game seed. Arithmetic wraps so
/// huge identities stay deterministic instead of panicking.
#[must_use]
pub fn game_seed(cohort_id: u64, game_count: usize, index: usize) -> u64 {
    cohort_id
        .wrapping_mul(game_count as u64)
        .wrapping_add(index as u64)
}

/// Seeded pseudo-random source for coin flips.
///
/// Uses ChaCha8 like the rest of the engine: fast, reproducible across
/// platforms, and independent per instance.
#[derive(Clone, Debug)]
pub struct FlipRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl FlipRng {
    /// Create a new stream with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one Bernoulli trial. Success is heads.
    pub fn flip(&mut self, coin: &Bernoulli) -> Outcome {
        Outcome::from_success(coin.sample(&mut self.inner))
    }
}
