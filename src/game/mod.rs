//! The coin-flip betting game.
//!
//! A player pays 250 to play, the coin is flipped a fixed number of times,
//! and every run of `TAILS, TAILS, HEADS` pays 100.
//!
//! ```
//! use coinflip_sim::game::Game;
//!
//! let mut game = Game::new(42, 0.5).unwrap();
//! game.simulate(20).unwrap();
//! assert!(game.payout() >= -250);
//! ```

mod coin_game;
pub mod pattern;

pub use coin_game::{FlipSequence, Game};
pub use pattern::{count_matches, payout_bounds, payout_for, ENTRY_COST, PATTERN, PATTERN_BONUS};
