// ABOUTME: Strength training models: logged sets, exercise sessions and dated events
// ABOUTME: Immutable input records fetched by the CRUD layer and fed to the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One logged set of an exercise
///
/// Weight and reps are optional because the diary lets users save partially
/// filled rows. Only sets with both present and positive take part in analytics.
///
/// # Examples
///
/// ```rust
/// use trainlog_core::models::LoggedSet;
///
/// let set = LoggedSet::new(1, 100.0, 5).with_rir(2);
/// assert!(set.is_valid());
/// assert_eq!(set.volume(), Some(500.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedSet {
    /// 1-based position of the set within the session
    pub set_number: u32,
    /// Load lifted (kg or lb, whatever the diary stores)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Completed repetitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Self-reported reps in reserve (0-10)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rir: Option<u8>,
}

impl LoggedSet {
    /// Create a fully populated set without reps-in-reserve
    #[must_use]
    pub const fn new(set_number: u32, weight: f64, reps: u32) -> Self {
        Self {
            set_number,
            weight: Some(weight),
            reps: Some(reps),
            rir: None,
        }
    }

    /// Attach a reps-in-reserve value
    #[must_use]
    pub const fn with_rir(mut self, rir: u8) -> Self {
        self.rir = Some(rir);
        self
    }

    /// Whether the set counts for analytics (weight and reps present and > 0)
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weight.is_some_and(|w| w.is_finite() && w > 0.0) && self.reps.is_some_and(|r| r > 0)
    }

    /// `weight * reps` for valid sets
    #[must_use]
    pub fn volume(&self) -> Option<f64> {
        if !self.is_valid() {
            return None;
        }
        match (self.weight, self.reps) {
            (Some(weight), Some(reps)) => Some(weight * f64::from(reps)),
            _ => None,
        }
    }
}

/// All sets of one exercise performed within one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSession {
    /// Workout the session belongs to; reported as the session id on outputs
    pub workout_id: String,
    /// Exercise performed
    pub exercise_id: String,
    /// When the workout took place
    pub occurred_at: DateTime<Utc>,
    /// Sets in logged order
    #[serde(default)]
    pub sets: Vec<LoggedSet>,
}

impl ExerciseSession {
    /// Create a session with no sets
    #[must_use]
    pub fn new(
        workout_id: impl Into<String>,
        exercise_id: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            workout_id: workout_id.into(),
            exercise_id: exercise_id.into(),
            occurred_at,
            sets: Vec::new(),
        }
    }

    /// Append a set, keeping logged order
    #[must_use]
    pub fn with_set(mut self, set: LoggedSet) -> Self {
        self.sets.push(set);
        self
    }

    /// Iterator over the sets that count for analytics, in logged order
    pub fn valid_sets(&self) -> impl Iterator<Item = &LoggedSet> {
        self.sets.iter().filter(|set| set.is_valid())
    }

    /// Whether the session will produce a progression point
    #[must_use]
    pub fn has_valid_sets(&self) -> bool {
        self.sets.iter().any(LoggedSet::is_valid)
    }
}

/// A dated event correlated against the cycle (an injury, a symptom, a PR)
///
/// The category is only used by callers to pre-filter; the engine reads the date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedEvent {
    /// Calendar date of the event
    pub date: NaiveDate,
    /// Free-form category tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl DatedEvent {
    /// Create an uncategorised event
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            category: None,
        }
    }

    /// Create an event with a category tag
    #[must_use]
    pub fn with_category(date: NaiveDate, category: impl Into<String>) -> Self {
        Self {
            date,
            category: Some(category.into()),
        }
    }
}
