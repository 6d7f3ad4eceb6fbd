// ABOUTME: Strength estimation algorithms
// ABOUTME: One-rep-max formulas selectable per call or averaged by consensus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// One-repetition maximum estimation
pub mod one_rep_max;

pub use one_rep_max::{estimate_one_rep_max, OneRepMaxEstimator, OneRepMaxFormula};
