// ABOUTME: Benchmark fixtures generating deterministic training history and events
// ABOUTME: Sessions go backwards from a fixed date so results are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for reproducible performance measurements.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use trainlog::models::{DatedEvent, ExerciseSession, LoggedSet};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// Three months of training
    Small,
    /// A year of training, typical long-term user
    Medium,
    /// Several years of training
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 40,
            Self::Medium => 200,
            Self::Large => 2000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Fixed "now" all fixtures are generated relative to
#[must_use]
pub fn bench_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 30, 12, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Reference cycle start for cycle benchmarks
#[must_use]
pub fn bench_reference_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default()
}

/// Generate `count` sessions alternating between three exercises
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_sessions(count: usize) -> Vec<ExerciseSession> {
    let exercises = ["squat", "bench", "deadlift"];
    (0..count)
        .map(|index| {
            let occurred_at = bench_now() - Duration::days((index * 2) as i64);
            let base = 60.0 + ((index * 7) % 80) as f64;
            let sets = (1..=4_u32)
                .map(|number| {
                    let set = LoggedSet::new(number, base + f64::from(number) * 2.5, 10 - number);
                    if number % 2 == 0 {
                        set.with_rir(((index + number as usize) % 4) as u8)
                    } else {
                        set
                    }
                })
                .collect();
            ExerciseSession {
                workout_id: format!("bench_workout_{index}"),
                exercise_id: exercises[index % exercises.len()].to_owned(),
                occurred_at,
                sets,
            }
        })
        .collect()
}

/// Generate `count` events spread over the last `count * 3` days
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_events(count: usize) -> Vec<DatedEvent> {
    let today = bench_now().date_naive();
    (0..count)
        .map(|index| {
            DatedEvent::with_category(today - Duration::days((index * 3) as i64), "injury")
        })
        .collect()
}
