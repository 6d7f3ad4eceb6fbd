// ABOUTME: Strength estimation configuration
// ABOUTME: Bounds applied to the effective rep count before the 1RM formulas run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use trainlog_core::constants::strength::{MAX_EFFECTIVE_REPS, MIN_EFFECTIVE_REPS};

/// Bounds for the effective rep count (reps + reps in reserve)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthConfig {
    /// Effective reps below this are raised to it
    pub min_effective_reps: u32,
    /// Effective reps above this saturate at it
    pub max_effective_reps: u32,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            min_effective_reps: MIN_EFFECTIVE_REPS,
            max_effective_reps: MAX_EFFECTIVE_REPS,
        }
    }
}
