// ABOUTME: Configuration module for trainlog-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analytics tunables (strength clamp, trend threshold, default cycle length)
pub mod intelligence;

pub use intelligence::{
    ConfigError, CycleModelConfig, IntelligenceConfig, ProgressionConfig, StrengthConfig,
};
