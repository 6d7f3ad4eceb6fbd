// ABOUTME: One-repetition maximum estimation from a single submaximal set
// ABOUTME: Implements Epley, Brzycki, Lombardi and O'Conner plus their consensus average
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use trainlog_core::constants::strength::{
    BRZYCKI_NUMERATOR, BRZYCKI_OFFSET, EPLEY_DIVISOR, LOMBARDI_EXPONENT, OCONNER_DIVISOR,
};
use trainlog_core::errors::AppError;

use crate::config::{IntelligenceConfig, StrengthConfig};
use crate::statistics::round_one_decimal;

/// One-rep-max estimation formula
///
/// Each formula extrapolates the load a lifter could move once from a heavier
/// set of several reps. Reps in reserve are added to the completed reps first,
/// so a set of 5 with 2 in reserve is treated as a 7-rep effort.
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage chart". Boyd Epley Workout.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue." *JOPERD*, 64(1), 88-90.
/// - Lombardi, V.P. (1989). *Beginning Weight Training*. W.C. Brown.
/// - O'Conner, B., Simmons, J., & O'Shea, P. (1989). *Weight Training Today*. West Publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxFormula {
    /// `w * (1 + r / 30)`
    Epley,
    /// `w * 36 / (37 - r)`
    Brzycki,
    /// `w * r^0.10`
    Lombardi,
    /// `w * (1 + r / 40)`
    #[serde(rename = "oconner")]
    OConner,
    /// Mean of the four formulas above
    #[default]
    Consensus,
}

impl OneRepMaxFormula {
    /// The four individual formulas averaged by [`OneRepMaxFormula::Consensus`]
    pub const INDIVIDUAL: [Self; 4] = [Self::Epley, Self::Brzycki, Self::Lombardi, Self::OConner];

    /// API string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Lombardi => "lombardi",
            Self::OConner => "oconner",
            Self::Consensus => "consensus",
        }
    }

    /// Apply the formula to an already-clamped rep count, unrounded
    #[must_use]
    pub fn apply(self, weight: f64, capped_reps: u32) -> f64 {
        let reps = f64::from(capped_reps);
        match self {
            Self::Epley => weight * (1.0 + reps / EPLEY_DIVISOR),
            Self::Brzycki => weight * (BRZYCKI_NUMERATOR / (BRZYCKI_OFFSET - reps)),
            Self::Lombardi => weight * reps.powf(LOMBARDI_EXPONENT),
            Self::OConner => weight * (1.0 + reps / OCONNER_DIVISOR),
            Self::Consensus => {
                let sum: f64 = Self::INDIVIDUAL
                    .iter()
                    .map(|formula| formula.apply(weight, capped_reps))
                    .sum();
                sum / 4.0
            }
        }
    }
}

impl fmt::Display for OneRepMaxFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OneRepMaxFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            "lombardi" => Ok(Self::Lombardi),
            "oconner" | "o'conner" | "oconnor" => Ok(Self::OConner),
            "consensus" | "average" | "mean" => Ok(Self::Consensus),
            _ => Err(AppError::invalid_input(format!(
                "Unknown one-rep-max formula: {s}"
            ))),
        }
    }
}

/// Estimator holding the effective-rep clamp bounds
#[derive(Debug, Clone, Copy)]
pub struct OneRepMaxEstimator {
    config: StrengthConfig,
    formula: OneRepMaxFormula,
}

impl Default for OneRepMaxEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl OneRepMaxEstimator {
    /// Create an estimator using the global configuration and the consensus formula
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().strength,
            formula: OneRepMaxFormula::Consensus,
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: StrengthConfig) -> Self {
        Self {
            config,
            formula: OneRepMaxFormula::Consensus,
        }
    }

    /// Use a single formula instead of the consensus
    #[must_use]
    pub const fn with_formula(mut self, formula: OneRepMaxFormula) -> Self {
        self.formula = formula;
        self
    }

    /// Effective reps (`reps + rir`) clamped into the configured bounds
    #[must_use]
    pub fn capped_reps(&self, reps: u32, rir: Option<u8>) -> u32 {
        reps.saturating_add(u32::from(rir.unwrap_or(0)))
            .clamp(self.config.min_effective_reps, self.config.max_effective_reps)
    }

    /// Estimated 1RM rounded to one decimal
    ///
    /// Rep counts beyond the upper bound saturate rather than fail. A
    /// non-positive or non-finite weight estimates 0.
    #[must_use]
    pub fn estimate(&self, weight: f64, reps: u32, rir: Option<u8>) -> f64 {
        if !weight.is_finite() || weight <= 0.0 {
            return 0.0;
        }
        let capped = self.capped_reps(reps, rir);
        round_one_decimal(self.formula.apply(weight, capped))
    }

    /// Every individual formula's unrounded estimate, in formula order
    #[must_use]
    pub fn breakdown(&self, weight: f64, reps: u32, rir: Option<u8>) -> Vec<(OneRepMaxFormula, f64)> {
        let capped = self.capped_reps(reps, rir);
        OneRepMaxFormula::INDIVIDUAL
            .iter()
            .map(|formula| (*formula, formula.apply(weight.max(0.0), capped)))
            .collect()
    }
}

/// Estimate a one-repetition maximum with the consensus formula
///
/// # Example
///
/// ```rust
/// use trainlog_intelligence::algorithms::estimate_one_rep_max;
///
/// // 5 reps with 2 in reserve behaves like a 7-rep max
/// assert!((estimate_one_rep_max(100.0, 5, Some(2)) - 120.6).abs() < 1e-9);
/// ```
#[must_use]
pub fn estimate_one_rep_max(weight: f64, reps: u32, rir: Option<u8>) -> f64 {
    OneRepMaxEstimator::with_config(StrengthConfig::default()).estimate(weight, reps, rir)
}
