// ABOUTME: Per-exercise strength progression, summary statistics and personal records
// ABOUTME: Windowed aggregation of sessions with improvement trend and earliest-wins records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength progression engine
//!
//! Every downstream reducer relies on points being sorted ascending by date:
//! the improvement trend splits the series in halves and personal records
//! keep the earliest point that reaches the maximum.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::errors::{AppError, AppResult};
use trainlog_core::models::{ExerciseSession, PersonalRecord, RecordMetric};

use crate::config::{IntelligenceConfig, ProgressionConfig};
use crate::session::{ProgressionPoint, SessionAggregator};
use crate::statistics::{max_or_zero, mean, round_one_decimal};
use crate::timeframe::{DateWindow, TimeFrame};

/// First-half versus second-half change over the window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementTrend {
    /// Change in mean max weight, percent (one decimal)
    pub weight_percent: f64,
    /// Change in mean session volume, percent (one decimal)
    pub volume_percent: f64,
    /// Timeframe the trend was computed over
    pub timeframe: TimeFrame,
}

impl ImprovementTrend {
    /// Trend reported when there are too few points
    #[must_use]
    pub const fn flat(timeframe: TimeFrame) -> Self {
        Self {
            weight_percent: 0.0,
            volume_percent: 0.0,
            timeframe,
        }
    }
}

/// Totals and peaks over the progression points of a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionSummary {
    /// Number of sessions with at least one valid set
    pub total_workouts: usize,
    /// Valid sets across those sessions
    pub total_sets: usize,
    /// Highest session max weight
    pub peak_weight: f64,
    /// Highest session volume
    pub peak_volume: f64,
    /// Highest estimated 1RM
    pub peak_one_rep_max: f64,
    /// Mean of the per-session average weight
    pub average_weight: f64,
    /// Mean session volume
    pub average_volume: f64,
    /// Improvement between the first and second half of the window
    pub improvement: ImprovementTrend,
}

/// The four personal records of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecords {
    /// Heaviest session max weight
    pub max_weight: PersonalRecord,
    /// Largest session volume
    pub max_volume: PersonalRecord,
    /// Highest estimated 1RM
    pub max_one_rep_max: PersonalRecord,
    /// Most reps in a best set
    pub max_reps: PersonalRecord,
}

impl PersonalRecords {
    /// Record for the given metric
    #[must_use]
    pub const fn get(&self, metric: RecordMetric) -> &PersonalRecord {
        match metric {
            RecordMetric::MaxWeight => &self.max_weight,
            RecordMetric::MaxVolume => &self.max_volume,
            RecordMetric::MaxOneRepMax => &self.max_one_rep_max,
            RecordMetric::MaxReps => &self.max_reps,
        }
    }
}

/// Full progression report for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgression {
    /// Exercise analysed
    pub exercise_id: String,
    /// Requested timeframe
    pub timeframe: TimeFrame,
    /// Resolved instant window
    pub window: DateWindow,
    /// One point per session, ascending by date
    pub points: Vec<ProgressionPoint>,
    /// Totals, peaks and improvement
    pub summary: ProgressionSummary,
    /// Personal records within the window
    pub personal_records: PersonalRecords,
}

/// Analyzes strength progression for one exercise
#[derive(Debug, Clone, Copy)]
pub struct ProgressionAnalyzer {
    config: ProgressionConfig,
    aggregator: SessionAggregator,
}

impl Default for ProgressionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionAnalyzer {
    /// Create an analyzer from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().progression,
            aggregator: SessionAggregator::default(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: ProgressionConfig, aggregator: SessionAggregator) -> Self {
        Self { config, aggregator }
    }

    /// Analyze progression over a timeframe ending today (UTC days)
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error if `exercise_id` is blank
    pub fn analyze(
        &self,
        exercise_id: &str,
        sessions: &[ExerciseSession],
        timeframe: TimeFrame,
        now: DateTime<Utc>,
    ) -> AppResult<ExerciseProgression> {
        self.analyze_with_offset(exercise_id, sessions, timeframe, now, Utc.fix())
    }

    /// Analyze progression with window days in the given local offset
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error if `exercise_id` is blank
    pub fn analyze_with_offset(
        &self,
        exercise_id: &str,
        sessions: &[ExerciseSession],
        timeframe: TimeFrame,
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> AppResult<ExerciseProgression> {
        let exercise_id = exercise_id.trim();
        if exercise_id.is_empty() {
            return Err(AppError::missing_field("exercise_id"));
        }

        let window = timeframe.resolve(now, offset);
        let points = self.build_points(exercise_id, sessions, &window);
        let summary = summarize(&points, timeframe, self.config.min_points_for_trend);
        let personal_records = personal_records(&points);

        debug!(
            exercise_id,
            timeframe = %timeframe,
            sessions = sessions.len(),
            points = points.len(),
            "Computed exercise progression"
        );

        Ok(ExerciseProgression {
            exercise_id: exercise_id.to_owned(),
            timeframe,
            window,
            points,
            summary,
            personal_records,
        })
    }

    /// Aggregate in-window sessions of the exercise into date-sorted points
    #[must_use]
    pub fn build_points(
        &self,
        exercise_id: &str,
        sessions: &[ExerciseSession],
        window: &DateWindow,
    ) -> Vec<ProgressionPoint> {
        let aggregator = self.aggregator;
        // rayon's collect keeps input order, so equal dates stay in input order after the stable sort
        let mut points: Vec<ProgressionPoint> = sessions
            .par_iter()
            .filter(|session| session.exercise_id == exercise_id)
            .filter(|session| window.contains(session.occurred_at))
            .filter_map(|session| aggregator.aggregate(session))
            .collect();
        points.sort_by(|a, b| a.date.cmp(&b.date));
        points
    }
}

/// Summarize date-sorted progression points
#[must_use]
pub fn summarize(
    points: &[ProgressionPoint],
    timeframe: TimeFrame,
    min_points_for_trend: usize,
) -> ProgressionSummary {
    ProgressionSummary {
        total_workouts: points.len(),
        total_sets: points.iter().map(|p| p.set_count).sum(),
        peak_weight: max_or_zero(points.iter().map(|p| p.max_weight)),
        peak_volume: max_or_zero(points.iter().map(|p| p.total_volume)),
        peak_one_rep_max: max_or_zero(points.iter().map(|p| p.estimated_one_rep_max)),
        average_weight: mean(points.iter().map(|p| p.avg_weight)),
        average_volume: mean(points.iter().map(|p| p.total_volume)),
        improvement: improvement_trend(points, timeframe, min_points_for_trend),
    }
}

/// Compare the first and second half of date-sorted points
///
/// The split is at `floor(n / 2)`, so an odd point count gives the extra point
/// to the second half. With fewer than `min_points` points the trend is flat.
#[must_use]
pub fn improvement_trend(
    points: &[ProgressionPoint],
    timeframe: TimeFrame,
    min_points: usize,
) -> ImprovementTrend {
    if points.len() < min_points || points.len() < 2 {
        return ImprovementTrend::flat(timeframe);
    }
    let (first, second) = points.split_at(points.len() / 2);

    let percent_change = |metric: fn(&ProgressionPoint) -> f64| {
        let first_mean = mean(first.iter().map(metric));
        let second_mean = mean(second.iter().map(metric));
        if first_mean > 0.0 {
            round_one_decimal((second_mean - first_mean) / first_mean * 100.0)
        } else {
            0.0
        }
    };

    ImprovementTrend {
        weight_percent: percent_change(|p| p.max_weight),
        volume_percent: percent_change(|p| p.total_volume),
        timeframe,
    }
}

/// Personal records over date-sorted points
///
/// A later point only takes a record with a strictly larger value, so ties go
/// to the earliest session. With no points every record is empty.
#[must_use]
pub fn personal_records(points: &[ProgressionPoint]) -> PersonalRecords {
    PersonalRecords {
        max_weight: record_for(points, RecordMetric::MaxWeight, |p| p.max_weight),
        max_volume: record_for(points, RecordMetric::MaxVolume, |p| p.total_volume),
        max_one_rep_max: record_for(points, RecordMetric::MaxOneRepMax, |p| {
            p.estimated_one_rep_max
        }),
        max_reps: record_for(points, RecordMetric::MaxReps, |p| {
            f64::from(p.best_set.reps)
        }),
    }
}

fn record_for(
    points: &[ProgressionPoint],
    metric: RecordMetric,
    value_of: impl Fn(&ProgressionPoint) -> f64,
) -> PersonalRecord {
    points
        .iter()
        .fold(None, |best: Option<&ProgressionPoint>, point| match best {
            None => Some(point),
            Some(incumbent) => {
                if value_of(point).partial_cmp(&value_of(incumbent)) == Some(Ordering::Greater) {
                    Some(point)
                } else {
                    Some(incumbent)
                }
            }
        })
        .map_or_else(
            || PersonalRecord::empty(metric),
            |point| PersonalRecord {
                metric,
                value: value_of(point),
                date: Some(point.date),
                session_id: Some(point.session_id.clone()),
            },
        )
}
