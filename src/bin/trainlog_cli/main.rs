// ABOUTME: Trainlog CLI - JSON-in/JSON-out harness around the training analytics engine
// ABOUTME: Estimates 1RMs, reports progression and correlates events and load with cycle phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimate a one-rep max from 100 kg x 5 with 2 reps in reserve
//! trainlog-cli estimate --weight 100 --reps 5 --rir 2
//!
//! # Progression of one exercise over the last three months
//! trainlog-cli progression --sessions sessions.json --exercise squat --timeframe 3months
//!
//! # Cycle phase for a date, with a calendar through the end of the month
//! trainlog-cli phase --reference-start 2025-03-01 --date 2025-03-10 --until 2025-03-31
//!
//! # Injury counts per phase
//! trainlog-cli phase-stats --events events.json --reference-start 2025-03-01 --category injury
//!
//! # Training load per phase
//! trainlog-cli phase-load --sessions sessions.json --reference-start 2025-03-01
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use trainlog::errors::{AppResult, ErrorResponse};
use trainlog::logging::{LogFormat, LoggingConfig};

use helpers::args::CycleArgs;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "trainlog-cli",
    about = "Trainlog training analytics CLI",
    long_about = "Derives strength progression, personal records and cycle phase statistics from JSON training history. Results are printed as JSON on stdout; logs go to stderr."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log format override (json, pretty, compact)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate a one-rep max from a single set
    Estimate {
        /// Load lifted
        #[arg(long)]
        weight: f64,

        /// Completed reps
        #[arg(long)]
        reps: u32,

        /// Reps in reserve
        #[arg(long)]
        rir: Option<u8>,

        /// Formula: epley, brzycki, lombardi, oconner or consensus
        #[arg(long, default_value = "consensus")]
        formula: String,
    },

    /// Progression, summary and personal records of one exercise
    Progression {
        /// Sessions JSON document
        #[arg(long)]
        sessions: PathBuf,

        /// Exercise to analyze
        #[arg(long)]
        exercise: String,

        /// Lookback: 1week, 1month, 3months, 6months, 1year or all
        #[arg(long, default_value = "3months")]
        timeframe: String,

        /// Reference instant for the window end (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Local offset from UTC in minutes used for day boundaries
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        utc_offset_minutes: i32,
    },

    /// Cycle day, phase and upcoming changes for a date
    Phase {
        #[command(flatten)]
        cycle: CycleArgs,

        /// Date to describe (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Also print a phase calendar through this date
        #[arg(long)]
        until: Option<String>,
    },

    /// Count dated events per cycle phase
    PhaseStats {
        /// Events JSON document
        #[arg(long)]
        events: PathBuf,

        #[command(flatten)]
        cycle: CycleArgs,

        /// Only count events with this category
        #[arg(long)]
        category: Option<String>,

        /// Date used for days-since-last-event (defaults to today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Training load per cycle phase
    PhaseLoad {
        /// Sessions JSON document
        #[arg(long)]
        sessions: PathBuf,

        #[command(flatten)]
        cycle: CycleArgs,

        /// Only include this exercise
        #[arg(long)]
        exercise: Option<String>,
    },
}

fn init_logging(cli: &Cli) {
    let mut config = LoggingConfig::from_env();
    if cli.verbose {
        config = config.with_level("debug");
    }
    if let Some(format) = cli.log_format {
        config = config.with_format(format);
    }
    if let Err(e) = config.init() {
        eprintln!("Warning: {e}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            let response = ErrorResponse::from(&e);
            match serde_json::to_string(&response) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("Error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Estimate {
            weight,
            reps,
            rir,
            formula,
        } => commands::strength::estimate(weight, reps, rir, &formula),
        Command::Progression {
            sessions,
            exercise,
            timeframe,
            now,
            utc_offset_minutes,
        } => commands::progression::analyze(
            &sessions,
            &exercise,
            &timeframe,
            now.as_deref(),
            utc_offset_minutes,
        ),
        Command::Phase { cycle, date, until } => {
            commands::cycle::phase(&cycle, date.as_deref(), until.as_deref())
        }
        Command::PhaseStats {
            events,
            cycle,
            category,
            today,
        } => commands::cycle::phase_stats(&events, &cycle, category.as_deref(), today.as_deref()),
        Command::PhaseLoad {
            sessions,
            cycle,
            exercise,
        } => commands::cycle::phase_load(&sessions, &cycle, exercise.as_deref()),
    }
}
