// ABOUTME: Loads training history and dated events from JSON documents with string dates
// ABOUTME: Validates raw rows into core models before they reach the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! JSON input documents
//!
//! Both documents accept either a bare array or an object wrapping the array:
//!
//! ```json
//! { "sessions": [ { "workoutId": "w1", "exerciseId": "squat",
//!                   "occurredAt": "2025-03-01T09:00:00Z",
//!                   "sets": [ { "setNumber": 1, "weight": 100, "reps": 5, "rir": 2 } ] } ] }
//! { "events": [ { "date": "2025-03-04", "category": "injury" } ] }
//! ```
//!
//! Keys are camelCase; snake_case aliases are accepted.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;
use trainlog_core::constants::rir::MAX_REPS_IN_RESERVE;
use trainlog_core::dates::{parse_date, parse_instant};
use trainlog_core::errors::{AppError, AppResult};
use trainlog_core::models::{DatedEvent, ExerciseSession, LoggedSet};

/// Raw logged set
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInput {
    /// 1-based set position; defaults to the position in the array
    #[serde(default, alias = "set_number")]
    pub set_number: Option<u32>,
    /// Load lifted
    #[serde(default)]
    pub weight: Option<f64>,
    /// Completed reps
    #[serde(default)]
    pub reps: Option<i64>,
    /// Reps in reserve
    #[serde(default)]
    pub rir: Option<i64>,
}

impl SetInput {
    fn into_set(self, position: usize) -> AppResult<LoggedSet> {
        let set_number = match self.set_number {
            Some(number) => number,
            None => u32::try_from(position + 1)
                .map_err(|_| AppError::value_out_of_range("too many sets in one session"))?,
        };
        let reps = self
            .reps
            .map(|reps| {
                u32::try_from(reps).map_err(|_| {
                    AppError::value_out_of_range(format!("reps must be non-negative, got {reps}"))
                        .with_field("reps")
                })
            })
            .transpose()?;
        let rir = self
            .rir
            .map(|rir| {
                u8::try_from(rir)
                    .ok()
                    .filter(|rir| *rir <= MAX_REPS_IN_RESERVE)
                    .ok_or_else(|| {
                        AppError::value_out_of_range(format!(
                            "rir must be between 0 and {MAX_REPS_IN_RESERVE}, got {rir}"
                        ))
                        .with_field("rir")
                    })
            })
            .transpose()?;
        Ok(LoggedSet {
            set_number,
            weight: self.weight,
            reps,
            rir,
        })
    }
}

/// Raw exercise session
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    /// Workout the session belongs to
    #[serde(alias = "workout_id", alias = "sessionId")]
    pub workout_id: String,
    /// Exercise performed
    #[serde(alias = "exercise_id")]
    pub exercise_id: String,
    /// RFC 3339 instant or `YYYY-MM-DD`
    #[serde(alias = "occurred_at", alias = "date")]
    pub occurred_at: String,
    /// Sets in logged order
    #[serde(default)]
    pub sets: Vec<SetInput>,
}

impl TryFrom<SessionInput> for ExerciseSession {
    type Error = AppError;

    fn try_from(input: SessionInput) -> AppResult<Self> {
        let occurred_at = parse_instant(&input.occurred_at).map_err(|e| {
            e.with_field("occurredAt")
                .with_resource_id(input.workout_id.clone())
        })?;
        let sets = input
            .sets
            .into_iter()
            .enumerate()
            .map(|(position, set)| {
                set.into_set(position)
                    .map_err(|e| e.with_resource_id(input.workout_id.clone()))
            })
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Self {
            workout_id: input.workout_id,
            exercise_id: input.exercise_id,
            occurred_at,
            sets,
        })
    }
}

/// Raw dated event
#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    /// `YYYY-MM-DD` or RFC 3339
    pub date: String,
    /// Optional category tag
    #[serde(default)]
    pub category: Option<String>,
}

impl TryFrom<EventInput> for DatedEvent {
    type Error = AppError;

    fn try_from(input: EventInput) -> AppResult<Self> {
        let date = parse_date(&input.date).map_err(|e| e.with_field("date"))?;
        Ok(Self {
            date,
            category: input.category,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SessionsDocument {
    Wrapped { sessions: Vec<SessionInput> },
    Bare(Vec<SessionInput>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EventsDocument {
    Wrapped { events: Vec<EventInput> },
    Bare(Vec<EventInput>),
}

/// Parse a sessions document
///
/// # Errors
///
/// Returns a `SerializationError` for malformed JSON, `InvalidConfiguration`
/// for malformed dates and `ValueOutOfRange` for negative reps or out-of-range RIR
pub fn parse_sessions(json: &str) -> AppResult<Vec<ExerciseSession>> {
    let raw = match serde_json::from_str(json)? {
        SessionsDocument::Wrapped { sessions } | SessionsDocument::Bare(sessions) => sessions,
    };
    raw.into_iter().map(ExerciseSession::try_from).collect()
}

/// Parse an events document
///
/// # Errors
///
/// Returns a `SerializationError` for malformed JSON and `InvalidConfiguration`
/// for malformed dates
pub fn parse_events(json: &str) -> AppResult<Vec<DatedEvent>> {
    let raw = match serde_json::from_str(json)? {
        EventsDocument::Wrapped { events } | EventsDocument::Bare(events) => events,
    };
    raw.into_iter().map(DatedEvent::try_from).collect()
}

/// Read and parse a sessions file
///
/// # Errors
///
/// Returns a `StorageError` if the file cannot be read, otherwise see [`parse_sessions`]
pub fn load_sessions(path: &Path) -> AppResult<Vec<ExerciseSession>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    let sessions = parse_sessions(&contents)?;
    debug!(path = %path.display(), sessions = sessions.len(), "Loaded sessions");
    Ok(sessions)
}

/// Read and parse an events file
///
/// # Errors
///
/// Returns a `StorageError` if the file cannot be read, otherwise see [`parse_events`]
pub fn load_events(path: &Path) -> AppResult<Vec<DatedEvent>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;
    let events = parse_events(&contents)?;
    debug!(path = %path.display(), events = events.len(), "Loaded events");
    Ok(events)
}
