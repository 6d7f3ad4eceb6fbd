// ABOUTME: Cycle phase commands for trainlog-cli
// ABOUTME: Phase snapshot and calendar, event correlation and training load by phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::path::Path;
use tracing::info;
use trainlog::dates::parse_date;
use trainlog::errors::AppResult;
use trainlog::input::{load_events, load_sessions};
use trainlog::intelligence::{
    CalendarDay, CyclePhaseCalculator, CycleSnapshot, PhaseBand, PhaseCorrelationAnalyzer,
    PhaseLoadAnalyzer, ProgressionPoint, SessionAggregator,
};

use crate::helpers::args::{date_or_today, CycleArgs};
use crate::helpers::display::print_json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhaseReport {
    snapshot: CycleSnapshot,
    bands: Vec<PhaseBand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    calendar: Option<Vec<CalendarDay>>,
}

/// Cycle day, phase and upcoming changes for a date, optionally with a calendar
pub fn phase(cycle: &CycleArgs, date: Option<&str>, until: Option<&str>) -> AppResult<()> {
    let config = cycle.to_config()?;
    let calculator = CyclePhaseCalculator::new(&config)?;
    let date = date_or_today(date, config.offset()?)?;

    let calendar = until
        .map(|raw| parse_date(raw).and_then(|until| calculator.calendar(date, until)))
        .transpose()?;

    let report = PhaseReport {
        snapshot: calculator.snapshot(date)?,
        bands: calculator
            .bands()
            .iter()
            .filter(|band| !band.is_empty())
            .copied()
            .collect(),
        calendar,
    };
    info!(date = %date, phase = %report.snapshot.phase, "Cycle phase computed");
    print_json(&report)
}

/// Correlate dated events with cycle phases
pub fn phase_stats(
    events_path: &Path,
    cycle: &CycleArgs,
    category: Option<&str>,
    today: Option<&str>,
) -> AppResult<()> {
    let config = cycle.to_config()?;
    let today = date_or_today(today, config.offset()?)?;

    let mut events = load_events(events_path)?;
    if let Some(category) = category {
        events.retain(|event| event.category.as_deref() == Some(category));
    }

    let statistics = PhaseCorrelationAnalyzer::analyze(&events, &config, today)?;
    info!(
        events = statistics.total_events,
        dominant_phase = ?statistics.dominant_phase,
        "Phase statistics computed"
    );
    print_json(&statistics)
}

/// Training load per cycle phase
pub fn phase_load(
    sessions_path: &Path,
    cycle: &CycleArgs,
    exercise_id: Option<&str>,
) -> AppResult<()> {
    let config = cycle.to_config()?;
    let aggregator = SessionAggregator::default();

    let points: Vec<ProgressionPoint> = load_sessions(sessions_path)?
        .iter()
        .filter(|session| exercise_id.is_none_or(|id| session.exercise_id == id))
        .filter_map(|session| aggregator.aggregate(session))
        .collect();

    let statistics = PhaseLoadAnalyzer::analyze(&points, &config)?;
    info!(
        sessions = statistics.total_sessions,
        highest_volume_phase = ?statistics.highest_volume_phase,
        "Training load by phase computed"
    );
    print_json(&statistics)
}
