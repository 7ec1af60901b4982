//! The payout rule: a fixed entry cost plus a bonus per `T, T, H` run.

use crate::core::Outcome;

/// Cost to play one game.
pub const ENTRY_COST: i64 = -250;

/// Paid for every occurrence of [`PATTERN`].
pub const PATTERN_BONUS: i64 = 100;

/// The winning run of flips.
pub const PATTERN: [Outcome; 3] = [Outcome::Tails, Outcome::Tails, Outcome::Heads];

/// Count every window of three consecutive flips that equals [`PATTERN`].
///
/// Windows slide one flip at a time, so no match is skipped.
#[must_use]
pub fn count_matches(flips: &[Outcome]) -> usize {
    flips.windows(PATTERN.len()).filter(|w| *w == PATTERN).count()
}

/// Net payout for a game with `matches` pattern occurrences.
#[must_use]
pub fn payout_for(matches: usize) -> i64 {
    ENTRY_COST + PATTERN_BONUS * matches as i64
}

/// Smallest and largest payout possible in a game of `flip_count` flips.
///
/// A match ends in heads and the next one needs two tails first, so matches
/// never share a flip.
#[must_use]
pub fn payout_bounds(flip_count: usize) -> (i64, i64) {
    (ENTRY_COST, payout_for(flip_count / PATTERN.len()))
}
