// ABOUTME: One-rep-max estimation command for trainlog-cli
// ABOUTME: Reports the selected estimate plus every individual formula's value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;
use trainlog::errors::{AppError, AppResult};
use trainlog::intelligence::statistics::round_one_decimal;
use trainlog::intelligence::{OneRepMaxEstimator, OneRepMaxFormula};

use crate::helpers::display::print_json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateReport {
    weight: f64,
    reps: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    rir: Option<u8>,
    effective_reps: u32,
    formula: OneRepMaxFormula,
    estimated_one_rep_max: f64,
    breakdown: BTreeMap<&'static str, f64>,
}

/// Estimate a one-rep max from one set
pub fn estimate(weight: f64, reps: u32, rir: Option<u8>, formula: &str) -> AppResult<()> {
    if reps == 0 {
        return Err(AppError::invalid_input("reps must be at least 1").with_field("reps"));
    }
    let formula: OneRepMaxFormula = formula.parse()?;
    let estimator = OneRepMaxEstimator::new().with_formula(formula);

    let report = EstimateReport {
        weight,
        reps,
        rir,
        effective_reps: estimator.capped_reps(reps, rir),
        formula,
        estimated_one_rep_max: estimator.estimate(weight, reps, rir),
        breakdown: estimator
            .breakdown(weight, reps, rir)
            .into_iter()
            .map(|(formula, value)| (formula.as_str(), round_one_decimal(value)))
            .collect(),
    };
    info!(formula = %formula, estimate = report.estimated_one_rep_max, "Estimated one-rep max");
    print_json(&report)
}
