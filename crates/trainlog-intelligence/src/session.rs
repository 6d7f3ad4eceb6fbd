// ABOUTME: Aggregates the logged sets of one exercise session into a progression point
// ABOUTME: Computes max/avg weight, volume, best set (with tie-break) and estimated 1RM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session aggregation
//!
//! Only valid sets (weight and reps both present and positive) take part.
//! A session without any valid set produces no point at all.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::models::{ExerciseSession, LoggedSet};

use crate::algorithms::OneRepMaxEstimator;
use crate::statistics::{mean, mean_opt};

/// The heaviest-volume set of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestSet {
    /// Load of the set
    pub weight: f64,
    /// Reps completed
    pub reps: u32,
    /// Reps in reserve, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rir: Option<u8>,
}

impl BestSet {
    /// `weight * reps`
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// Derived summary of one session; never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Workout id of the session
    pub session_id: String,
    /// Number of valid sets
    pub set_count: usize,
    /// Heaviest valid weight
    pub max_weight: f64,
    /// Mean valid weight
    pub avg_weight: f64,
    /// Sum of weight x reps over valid sets
    pub total_volume: f64,
    /// Set with the largest weight x reps
    pub best_set: BestSet,
    /// Estimated 1RM of the best set
    pub estimated_one_rep_max: f64,
    /// Mean reps over valid sets
    pub avg_reps: f64,
    /// Mean reps in reserve over sets reporting it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rir: Option<f64>,
}

/// Pick the best set from valid sets in logged order
///
/// The first set starts as best. A later set replaces it only with a strictly
/// larger `weight * reps`, or an equal product at a strictly heavier weight.
#[must_use]
pub fn select_best_set<'a>(sets: impl IntoIterator<Item = &'a LoggedSet>) -> Option<BestSet> {
    sets.into_iter()
        .filter_map(|set| match (set.weight, set.reps) {
            (Some(weight), Some(reps)) if set.is_valid() => Some(BestSet {
                weight,
                reps,
                rir: set.rir,
            }),
            _ => None,
        })
        .fold(None, |best: Option<BestSet>, candidate| match best {
            None => Some(candidate),
            Some(incumbent) => match candidate.volume().partial_cmp(&incumbent.volume()) {
                Some(Ordering::Greater) => Some(candidate),
                Some(Ordering::Equal) if candidate.weight > incumbent.weight => Some(candidate),
                _ => Some(incumbent),
            },
        })
}

/// Turns sessions into progression points
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionAggregator {
    estimator: OneRepMaxEstimator,
}

impl SessionAggregator {
    /// Create an aggregator with the given 1RM estimator
    #[must_use]
    pub const fn new(estimator: OneRepMaxEstimator) -> Self {
        Self { estimator }
    }

    /// Aggregate one session; `None` when it has no valid set
    #[must_use]
    pub fn aggregate(&self, session: &ExerciseSession) -> Option<ProgressionPoint> {
        let valid: Vec<&LoggedSet> = session.valid_sets().collect();
        let best_set = select_best_set(valid.iter().copied())?;

        let weights: Vec<f64> = valid.iter().filter_map(|set| set.weight).collect();
        let reps: Vec<f64> = valid
            .iter()
            .filter_map(|set| set.reps.map(f64::from))
            .collect();
        let total_volume: f64 = valid.iter().filter_map(|set| set.volume()).sum();
        let max_weight = weights.iter().copied().fold(0.0_f64, f64::max);

        let skipped = session.sets.len() - valid.len();
        if skipped > 0 {
            debug!(
                session_id = %session.workout_id,
                skipped,
                "Ignoring sets without positive weight and reps"
            );
        }

        Some(ProgressionPoint {
            date: session.occurred_at,
            session_id: session.workout_id.clone(),
            set_count: valid.len(),
            max_weight,
            avg_weight: mean(weights.iter().copied()),
            total_volume,
            best_set,
            estimated_one_rep_max: self
                .estimator
                .estimate(best_set.weight, best_set.reps, best_set.rir),
            avg_reps: mean(reps),
            avg_rir: mean_opt(valid.iter().filter_map(|set| set.rir.map(f64::from))),
        })
    }
}

/// Aggregate one session with the default estimator
#[must_use]
pub fn aggregate_session(session: &ExerciseSession) -> Option<ProgressionPoint> {
    SessionAggregator::default().aggregate(session)
}
