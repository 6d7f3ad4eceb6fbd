// ABOUTME: Main library entry point for the Trainlog training analytics engine
// ABOUTME: Re-exports the core and intelligence crates plus logging and JSON input loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Trainlog
//!
//! Derived analytics for a personal training and cycle diary: estimated
//! one-rep maxes, per-exercise progression and personal records, cycle day
//! and phase of any date, and how injuries or training load distribute over
//! the cycle.
//!
//! ## Architecture
//!
//! - **`trainlog_core`**: errors, domain models, constants, date parsing
//! - **`trainlog_intelligence`**: the analyzers, all pure and synchronous
//! - **logging**: `tracing-subscriber` setup
//! - **input**: JSON documents into validated models
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use trainlog::intelligence::{ProgressionAnalyzer, TimeFrame};
//! use trainlog::models::{ExerciseSession, LoggedSet};
//!
//! let session = ExerciseSession::new("w1", "squat", Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
//!     .with_set(LoggedSet::new(1, 100.0, 5).with_rir(2));
//! let now = Utc.with_ymd_and_hms(2025, 3, 2, 12, 0, 0).unwrap();
//!
//! let progression = ProgressionAnalyzer::new()
//!     .analyze("squat", &[session], TimeFrame::OneWeek, now)
//!     .unwrap();
//! assert_eq!(progression.summary.total_workouts, 1);
//! # let _ = NaiveDate::from_ymd_opt(2025, 3, 1);
//! ```

/// Structured logging setup
pub mod logging;

/// JSON input loading
pub mod input;

pub use trainlog_core::{constants, dates, errors, models};
pub use trainlog_intelligence as intelligence;
