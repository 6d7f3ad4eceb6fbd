// ABOUTME: Progression summary configuration
// ABOUTME: Controls when the first-half/second-half improvement trend is reported
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use trainlog_core::constants::progression::MIN_POINTS_FOR_TREND;

/// Progression summary configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Points required before improvement percentages are computed
    pub min_points_for_trend: usize,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            min_points_for_trend: MIN_POINTS_FOR_TREND,
        }
    }
}
