// ABOUTME: Personal record models for strength progression
// ABOUTME: RecordMetric kinds and the PersonalRecord value linking back to a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of personal record tracked per exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecordMetric {
    /// Heaviest weight lifted in a session
    MaxWeight,
    /// Largest session volume (sum of weight x reps)
    MaxVolume,
    /// Highest estimated one-repetition maximum
    MaxOneRepMax,
    /// Most reps in a session's best set
    MaxReps,
}

impl RecordMetric {
    /// All record kinds in reporting order
    pub const ALL: [Self; 4] = [
        Self::MaxWeight,
        Self::MaxVolume,
        Self::MaxOneRepMax,
        Self::MaxReps,
    ];

    /// API string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MaxWeight => "max_weight",
            Self::MaxVolume => "max_volume",
            Self::MaxOneRepMax => "max_one_rep_max",
            Self::MaxReps => "max_reps",
        }
    }
}

/// A personal record: the first session reaching the best value of a metric
///
/// With no history the record is empty: value 0 and no date or session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Type of performance metric
    pub metric: RecordMetric,
    /// Value of the record (units depend on metric type)
    pub value: f64,
    /// When the record was achieved
    pub date: Option<DateTime<Utc>>,
    /// Workout where the record was achieved
    pub session_id: Option<String>,
}

impl PersonalRecord {
    /// Record with no achieving session
    #[must_use]
    pub const fn empty(metric: RecordMetric) -> Self {
        Self {
            metric,
            value: 0.0,
            date: None,
            session_id: None,
        }
    }

    /// Whether any session has set this record
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.date.is_some()
    }
}
