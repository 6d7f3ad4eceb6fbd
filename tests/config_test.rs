// ABOUTME: Tests for intelligence configuration defaults, validation and environment overrides
// ABOUTME: Environment-mutating tests run serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

use serial_test::serial;
use std::env;
use trainlog::errors::ErrorCode;
use trainlog::intelligence::config::ConfigError;
use trainlog::intelligence::{IntelligenceConfig, StrengthConfig};

const VARS: [&str; 4] = [
    "TRAINLOG_STRENGTH_MIN_REPS",
    "TRAINLOG_STRENGTH_MAX_REPS",
    "TRAINLOG_PROGRESSION_MIN_TREND_POINTS",
    "TRAINLOG_CYCLE_DEFAULT_LENGTH_DAYS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_defaults_match_documented_constants() {
    let config = IntelligenceConfig::default();
    assert_eq!(config.strength.min_effective_reps, 1);
    assert_eq!(config.strength.max_effective_reps, 30);
    assert_eq!(config.progression.min_points_for_trend, 4);
    assert_eq!(config.cycle.default_cycle_length_days, 28);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_rejects_inverted_rep_bounds() {
    let mut config = IntelligenceConfig::default();
    config.strength = StrengthConfig {
        min_effective_reps: 10,
        max_effective_reps: 5,
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validation_rejects_degenerate_values() {
    let mut config = IntelligenceConfig::default();
    config.strength.max_effective_reps = 37;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = IntelligenceConfig::default();
    config.progression.min_points_for_trend = 1;
    assert!(config.validate().is_err());

    let mut config = IntelligenceConfig::default();
    config.cycle.default_cycle_length_days = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_converts_to_app_error() {
    let error: trainlog::errors::AppError = ConfigError::Parse("Invalid X".into()).into();
    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_load_without_overrides_is_default() {
    clear_env();
    assert_eq!(IntelligenceConfig::load().unwrap(), IntelligenceConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides_are_applied() {
    clear_env();
    env::set_var("TRAINLOG_STRENGTH_MAX_REPS", "12");
    env::set_var("TRAINLOG_PROGRESSION_MIN_TREND_POINTS", " 6 ");
    env::set_var("TRAINLOG_CYCLE_DEFAULT_LENGTH_DAYS", "30");

    let config = IntelligenceConfig::load().unwrap();
    clear_env();

    assert_eq!(config.strength.max_effective_reps, 12);
    assert_eq!(config.progression.min_points_for_trend, 6);
    assert_eq!(config.cycle.default_cycle_length_days, 30);
}

#[test]
#[serial]
fn test_unparseable_override_fails_load() {
    clear_env();
    env::set_var("TRAINLOG_STRENGTH_MIN_REPS", "three");
    let result = IntelligenceConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_failing_validation_fails_load() {
    clear_env();
    env::set_var("TRAINLOG_STRENGTH_MIN_REPS", "20");
    env::set_var("TRAINLOG_STRENGTH_MAX_REPS", "10");
    let result = IntelligenceConfig::load();
    clear_env();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}
