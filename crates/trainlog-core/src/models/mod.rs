// ABOUTME: Core data models consumed and produced by the analytics engine
// ABOUTME: Re-exports training, personal record and cycle types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Input records arrive already fetched and authorized from the surrounding
//! diary application. They are immutable for the engine: every analyzer
//! borrows them and returns new values.
//!
//! ## Core Models
//!
//! - `LoggedSet` / `ExerciseSession`: strength training history
//! - `DatedEvent`: dated occurrences (injuries, symptoms) to correlate with the cycle
//! - `PersonalRecord` / `RecordMetric`: best values per exercise
//! - `CycleConfig` / `CyclePhase`: the biological cycle model

mod cycle;
mod records;
mod training;

pub use cycle::{CycleConfig, CyclePhase};
pub use records::{PersonalRecord, RecordMetric};
pub use training::{DatedEvent, ExerciseSession, LoggedSet};
