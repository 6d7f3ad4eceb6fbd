// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup plus session, set and cycle configuration helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `trainlog`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::sync::Once;
use trainlog::models::{CycleConfig, DatedEvent, ExerciseSession, LoggedSet};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// UTC instant at a given hour of a day
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Fully populated set
pub fn set(number: u32, weight: f64, reps: u32) -> LoggedSet {
    LoggedSet::new(number, weight, reps)
}

/// Session of `exercise_id` with the given sets at `occurred_at`
pub fn session(
    workout_id: &str,
    exercise_id: &str,
    occurred_at: DateTime<Utc>,
    sets: Vec<LoggedSet>,
) -> ExerciseSession {
    sets.into_iter().fold(
        ExerciseSession::new(workout_id, exercise_id, occurred_at),
        ExerciseSession::with_set,
    )
}

/// Single-set squat session whose max weight is `weight`
pub fn squat_session(workout_id: &str, occurred_at: DateTime<Utc>, weight: f64, reps: u32) -> ExerciseSession {
    session(workout_id, "squat", occurred_at, vec![set(1, weight, reps)])
}

/// Cycle of `length` days starting on `start`, in UTC
pub fn cycle_config(length: u32, start: NaiveDate) -> CycleConfig {
    CycleConfig::new(length, start, 0).unwrap()
}

/// Event on each of the given dates
pub fn events_on(dates: &[NaiveDate]) -> Vec<DatedEvent> {
    dates.iter().copied().map(DatedEvent::new).collect()
}

/// Approximate float equality for one-decimal outputs
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
