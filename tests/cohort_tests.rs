//! Integration tests for cohort simulation and aggregation.

use coinflip_sim::{Cohort, SimError, SimulationConfig};
use proptest::prelude::*;

// =============================================================================
// Reference Run
// =============================================================================

#[test]
fn test_default_cohort_pinned_statistics() {
    let config = SimulationConfig::default();
    let mut cohort = Cohort::from_config(&config).unwrap();
    cohort.simulate(config.flip_count).unwrap();

    assert_eq!(cohort.payouts().len(), 1000);
    assert!((cohort.expected_value().unwrap() - (-24.9)).abs() < 1e-9);
    assert_eq!(cohort.max(), Ok(250));
    assert_eq!(cohort.min(), Ok(-250));
    assert!((cohort.probability_of_loss().unwrap() - 0.608).abs() < 1e-12);
}

#[test]
fn test_default_cohort_payout_distribution() {
    let mut cohort = Cohort::new(1, 1000, 0.5).unwrap();
    cohort.simulate(20).unwrap();

    let count = |v: i64| cohort.payouts().iter().filter(|&&p| p == v).count();
    assert_eq!(count(-250), 23);
    assert_eq!(count(-150), 203);
    assert_eq!(count(-50), 382);
    assert_eq!(count(50), 291);
    assert_eq!(count(150), 94);
    assert_eq!(count(250), 7);
}

#[test]
fn test_repeated_runs_agree() {
    let run = || {
        let mut cohort = Cohort::new(1, 1000, 0.5).unwrap();
        cohort.simulate(20).unwrap();
        cohort.summary().unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_different_cohorts_differ() {
    let mut a = Cohort::new(1, 200, 0.5).unwrap();
    let mut b = Cohort::new(2, 200, 0.5).unwrap();
    a.simulate(20).unwrap();
    b.simulate(20).unwrap();

    assert_ne!(a.payouts(), b.payouts());
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_fresh_cohort_refuses_statistics() {
    let cohort = Cohort::new(1, 1000, 0.5).unwrap();

    assert_eq!(cohort.max(), Err(SimError::EmptyAggregation));
    assert_eq!(cohort.min(), Err(SimError::EmptyAggregation));
    assert_eq!(cohort.expected_value(), Err(SimError::EmptyAggregation));
    assert_eq!(cohort.probability_of_loss(), Err(SimError::EmptyAggregation));
}

#[test]
fn test_second_simulate_is_rejected() {
    let mut cohort = Cohort::new(1, 10, 0.5).unwrap();
    cohort.simulate(20).unwrap();
    let before = cohort.payouts().to_vec();

    assert!(matches!(cohort.simulate(20), Err(SimError::AlreadySimulated(_))));
    assert_eq!(cohort.payouts(), before.as_slice());
}

#[test]
fn test_games_keep_construction_order() {
    let mut cohort = Cohort::new(5, 50, 0.5).unwrap();
    cohort.simulate(20).unwrap();

    for (i, (game, &payout)) in cohort.games().iter().zip(cohort.payouts()).enumerate() {
        assert_eq!(game.identity(), 5 * 50 + i as u64);
        assert_eq!(game.payout(), payout);
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_aggregation_consistent(
        id in 0u64..10_000,
        games in 1usize..200,
        flips in 0usize..40,
        p in 0.0f64..=1.0,
    ) {
        let mut cohort = Cohort::new(id, games, p).unwrap();
        cohort.simulate(flips).unwrap();

        let payouts = cohort.payouts();
        prop_assert_eq!(payouts.len(), games);

        let max = cohort.max().unwrap() as f64;
        let min = cohort.min().unwrap() as f64;
        let mean = cohort.expected_value().unwrap();
        prop_assert!(max >= mean - 1e-9);
        prop_assert!(mean >= min - 1e-9);

        let losses = payouts.iter().filter(|&&x| x < 0).count() as f64;
        prop_assert_eq!(cohort.probability_of_loss().unwrap(), losses / games as f64);
    }
}
