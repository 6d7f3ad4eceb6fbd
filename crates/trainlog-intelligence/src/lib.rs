// ABOUTME: Training analytics engine turning logged sets and dated events into insights
// ABOUTME: Strength estimation, progression, personal records and cycle phase correlation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog Intelligence
//!
//! Pure, synchronous computations over history the caller has already
//! fetched. Nothing here performs I/O or keeps state between calls, so every
//! analyzer can be shared freely across threads.
//!
//! ## Components
//!
//! - **timeframe**: symbolic lookback tokens resolved to instant windows
//! - **algorithms**: one-rep-max estimation
//! - **session**: per-session aggregation into progression points
//! - **progression**: summaries, improvement trend and personal records
//! - **cycle**: cycle day and phase of a date, snapshots and calendars
//! - **`phase_statistics`**: event counts per phase and the dominant phase
//! - **`phase_load`**: training load per phase

/// Strength estimation algorithms
pub mod algorithms;

/// Engine tunables with environment overrides
pub mod config;

/// Cycle phase calculator
pub mod cycle;

/// Training load grouped by cycle phase
pub mod phase_load;

/// Event correlation with cycle phases
pub mod phase_statistics;

/// Strength progression and personal records
pub mod progression;

/// Session aggregation
pub mod session;

/// Numeric helpers
pub mod statistics;

/// Timeframe resolution
pub mod timeframe;

pub use algorithms::{estimate_one_rep_max, OneRepMaxEstimator, OneRepMaxFormula};
pub use config::{CycleModelConfig, IntelligenceConfig, ProgressionConfig, StrengthConfig};
pub use cycle::{
    cycle_phase_for_date, cycle_snapshot, phase_bands, phase_calendar, phase_for_cycle_day,
    CalendarDay, CycleDay, CyclePhaseCalculator, CycleSnapshot, PhaseBand,
};
pub use phase_load::{PhaseLoad, PhaseLoadAnalyzer, PhaseLoadStatistics, PhaseLoads};
pub use phase_statistics::{PhaseCorrelationAnalyzer, PhaseCounts, PhaseStatistics};
pub use progression::{
    ExerciseProgression, ImprovementTrend, PersonalRecords, ProgressionAnalyzer,
    ProgressionSummary,
};
pub use session::{aggregate_session, select_best_set, BestSet, ProgressionPoint, SessionAggregator};
pub use timeframe::{DateWindow, TimeFrame};
