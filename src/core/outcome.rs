//! Result of a single coin flip.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One flip of the coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Heads,
    Tails,
}

impl Outcome {
    /// Map a Bernoulli success to heads and a failure to tails.
    #[inline]
    #[must_use]
    pub fn from_success(success: bool) -> Self {
        if success {
            Outcome::Heads
        } else {
            Outcome::Tails
        }
    }

    /// Single-letter form, `H` or `T`.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Outcome::Heads => 'H',
            Outcome::Tails => 'T',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_success() {
        assert_eq!(Outcome::from_success(true), Outcome::Heads);
        assert_eq!(Outcome::from_success(false), Outcome::Tails);
    }

    #[test]
    fn test_display() {
        let flips = [Outcome::Tails, Outcome::Tails, Outcome::Heads];
        let text: String = flips.iter().map(ToString::to_string).collect();
        assert_eq!(text, "TTH");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Outcome::Heads).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::Heads);
    }
}
