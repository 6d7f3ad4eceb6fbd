// ABOUTME: Tests for one-rep-max estimation formulas and effective-rep clamping
// ABOUTME: Covers the regression anchor, saturation above 30 reps and formula selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

mod common;

use common::assert_close;
use proptest::prelude::*;
use trainlog::intelligence::{
    estimate_one_rep_max, OneRepMaxEstimator, OneRepMaxFormula, StrengthConfig,
};

fn estimator() -> OneRepMaxEstimator {
    OneRepMaxEstimator::with_config(StrengthConfig::default())
}

#[test]
fn test_consensus_regression_anchor() {
    // 5 reps + 2 in reserve is a 7-rep effort
    assert_close(estimate_one_rep_max(100.0, 5, Some(2)), 120.6);
}

#[test]
fn test_individual_formulas_at_seven_reps() {
    let breakdown = estimator().breakdown(100.0, 5, Some(2));
    let value_of = |formula: OneRepMaxFormula| {
        breakdown
            .iter()
            .find(|(f, _)| *f == formula)
            .map(|(_, value)| *value)
            .unwrap()
    };

    assert!((value_of(OneRepMaxFormula::Epley) - 123.333).abs() < 1e-3);
    assert!((value_of(OneRepMaxFormula::Brzycki) - 120.0).abs() < 1e-9);
    assert!((value_of(OneRepMaxFormula::Lombardi) - 121.481).abs() < 1e-3);
    assert!((value_of(OneRepMaxFormula::OConner) - 117.5).abs() < 1e-9);
    assert_eq!(breakdown.len(), 4);
}

#[test]
fn test_single_formula_selection() {
    let epley = estimator().with_formula(OneRepMaxFormula::Epley);
    assert_close(epley.estimate(100.0, 5, Some(2)), 123.3);

    let brzycki = estimator().with_formula(OneRepMaxFormula::Brzycki);
    assert_close(brzycki.estimate(100.0, 7, None), 120.0);
}

#[test]
fn test_zero_reps_clamp_to_one() {
    assert_close(
        estimate_one_rep_max(100.0, 0, None),
        estimate_one_rep_max(100.0, 1, None),
    );
}

#[test]
fn test_single_rep_is_close_to_the_load() {
    // Lombardi gives exactly the load at one rep, the others slightly more
    let estimate = estimate_one_rep_max(100.0, 1, None);
    assert!(estimate >= 100.0 && estimate < 103.0, "got {estimate}");
}

#[test]
fn test_non_positive_weight_estimates_zero() {
    assert_close(estimate_one_rep_max(0.0, 5, None), 0.0);
    assert_close(estimate_one_rep_max(-20.0, 5, None), 0.0);
    assert_close(estimate_one_rep_max(f64::NAN, 5, None), 0.0);
}

#[test]
fn test_rir_pushing_past_thirty_saturates() {
    assert_close(
        estimate_one_rep_max(60.0, 28, Some(5)),
        estimate_one_rep_max(60.0, 30, None),
    );
}

#[test]
fn test_custom_clamp_bounds() {
    let capped = OneRepMaxEstimator::with_config(StrengthConfig {
        min_effective_reps: 1,
        max_effective_reps: 12,
    });
    assert_eq!(capped.capped_reps(20, None), 12);
    assert_close(capped.estimate(100.0, 20, None), capped.estimate(100.0, 12, None));
}

#[test]
fn test_formula_parsing() {
    assert_eq!("Epley".parse::<OneRepMaxFormula>().unwrap(), OneRepMaxFormula::Epley);
    assert_eq!("o'conner".parse::<OneRepMaxFormula>().unwrap(), OneRepMaxFormula::OConner);
    assert_eq!("consensus".parse::<OneRepMaxFormula>().unwrap(), OneRepMaxFormula::Consensus);
    assert!("wathan".parse::<OneRepMaxFormula>().is_err());
    assert_eq!(OneRepMaxFormula::default(), OneRepMaxFormula::Consensus);
}

proptest! {
    #[test]
    fn prop_reps_above_thirty_equal_thirty(
        weight in 1.0_f64..500.0,
        reps in 30_u32..500,
        rir in proptest::option::of(0_u8..=10),
    ) {
        let at_cap = estimate_one_rep_max(weight, 30, None);
        prop_assert!((estimate_one_rep_max(weight, reps, rir) - at_cap).abs() < 1e-9);
    }

    #[test]
    fn prop_estimate_never_below_load(weight in 1.0_f64..500.0, reps in 1_u32..30) {
        // Rounding can shave at most 0.05 off
        prop_assert!(estimate_one_rep_max(weight, reps, None) >= weight - 0.051);
    }
}
