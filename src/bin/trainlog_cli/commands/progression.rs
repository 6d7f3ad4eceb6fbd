// ABOUTME: Progression and personal-record command for trainlog-cli
// ABOUTME: Reads a sessions document and prints the exercise progression report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, FixedOffset, Utc};
use std::path::Path;
use tracing::info;
use trainlog::dates::parse_instant;
use trainlog::errors::{AppError, AppResult};
use trainlog::input::load_sessions;
use trainlog::intelligence::{ProgressionAnalyzer, TimeFrame};

use crate::helpers::display::print_json;

/// Analyze one exercise over a timeframe
pub fn analyze(
    sessions_path: &Path,
    exercise_id: &str,
    timeframe: &str,
    now: Option<&str>,
    utc_offset_minutes: i32,
) -> AppResult<()> {
    let timeframe: TimeFrame = timeframe.parse()?;
    let now: DateTime<Utc> = now.map_or_else(|| Ok(Utc::now()), parse_instant)?;
    let offset = FixedOffset::east_opt(utc_offset_minutes * 60).ok_or_else(|| {
        AppError::invalid_configuration(format!(
            "utc_offset_minutes out of range: {utc_offset_minutes}"
        ))
        .with_field("utc_offset_minutes")
    })?;

    let sessions = load_sessions(sessions_path)?;
    let progression =
        ProgressionAnalyzer::new().analyze_with_offset(exercise_id, &sessions, timeframe, now, offset)?;

    info!(
        exercise_id,
        timeframe = %timeframe,
        workouts = progression.summary.total_workouts,
        "Progression computed"
    );
    print_json(&progression)
}
