// ABOUTME: Date and instant parsing helpers shared by models and the input loader
// ABOUTME: Malformed values are reported as InvalidConfiguration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::errors::{AppError, AppResult};

/// Parse a calendar date
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp, in which case the date
/// in the timestamp's own offset is used.
///
/// # Errors
///
/// Returns an `InvalidConfiguration` error if the value matches neither format
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| AppError::invalid_date(raw))
}

/// Parse an instant
///
/// Accepts RFC 3339 or a bare `YYYY-MM-DD`, read as midnight UTC.
///
/// # Errors
///
/// Returns an `InvalidConfiguration` error if the value matches neither format
pub fn parse_instant(raw: &str) -> AppResult<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| AppError::invalid_date(raw))
}
