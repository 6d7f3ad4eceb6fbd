// ABOUTME: Cycle model configuration
// ABOUTME: Default cycle length used when callers have no confirmed length yet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use trainlog_core::constants::cycle::DEFAULT_CYCLE_LENGTH_DAYS;

/// Cycle model configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleModelConfig {
    /// Length assumed when the user has not configured one
    pub default_cycle_length_days: u32,
}

impl Default for CycleModelConfig {
    fn default() -> Self {
        Self {
            default_cycle_length_days: DEFAULT_CYCLE_LENGTH_DAYS,
        }
    }
}
