// ABOUTME: Argument groups shared by several trainlog-cli subcommands
// ABOUTME: Cycle configuration flags and "today" resolution in the user's offset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{FixedOffset, NaiveDate, Utc};
use clap::Args;
use trainlog::dates::parse_date;
use trainlog::errors::AppResult;
use trainlog::intelligence::IntelligenceConfig;
use trainlog::models::CycleConfig;

/// Cycle configuration flags
#[derive(Debug, Args)]
pub struct CycleArgs {
    /// Cycle length in days (defaults to the configured default length)
    #[arg(long, allow_negative_numbers = true)]
    pub cycle_length: Option<i64>,

    /// Most recent confirmed cycle start (YYYY-MM-DD)
    #[arg(long)]
    pub reference_start: String,

    /// Local offset from UTC in minutes
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub utc_offset_minutes: i32,
}

impl CycleArgs {
    /// Validate the flags into a cycle configuration
    pub fn to_config(&self) -> AppResult<CycleConfig> {
        let default_length = IntelligenceConfig::global().cycle.default_cycle_length_days;
        CycleConfig::parse(
            self.cycle_length.unwrap_or_else(|| i64::from(default_length)),
            &self.reference_start,
            self.utc_offset_minutes,
        )
    }
}

/// Parse an optional date flag, defaulting to today in the given offset
pub fn date_or_today(raw: Option<&str>, offset: FixedOffset) -> AppResult<NaiveDate> {
    raw.map_or_else(
        || Ok(Utc::now().with_timezone(&offset).date_naive()),
        parse_date,
    )
}
