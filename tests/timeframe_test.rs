// ABOUTME: Tests for timeframe token parsing and window resolution
// ABOUTME: Covers calendar month clamping, the epoch start for "all" and inclusive bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

mod common;

use chrono::{DateTime, FixedOffset, TimeDelta};
use common::at;
use trainlog::intelligence::TimeFrame;

#[test]
fn test_tokens_round_trip_through_from_str() {
    for timeframe in TimeFrame::ALL_TIMEFRAMES {
        assert_eq!(timeframe.as_str().parse::<TimeFrame>().unwrap(), timeframe);
    }
    assert_eq!(" 1WEEK ".parse::<TimeFrame>().unwrap(), TimeFrame::OneWeek);
}

#[test]
fn test_unknown_token_is_invalid_configuration() {
    let error = "2weeks".parse::<TimeFrame>().unwrap_err();
    assert!(error.is_invalid_configuration());
    assert_eq!(error.context.field.as_deref(), Some("timeframe"));
}

#[test]
fn test_default_is_three_months() {
    assert_eq!(TimeFrame::default(), TimeFrame::ThreeMonths);
}

#[test]
fn test_month_lookback_clamps_to_month_end() {
    let window = TimeFrame::OneMonth.resolve_utc(at(2025, 3, 31, 15));
    assert_eq!(window.start.to_rfc3339(), "2025-02-28T00:00:00+00:00");
    assert_eq!(window.end.to_rfc3339(), "2025-03-31T23:59:59.999+00:00");
}

#[test]
fn test_year_lookback_from_leap_day() {
    let window = TimeFrame::OneYear.resolve_utc(at(2024, 2, 29, 12));
    assert_eq!(window.start.to_rfc3339(), "2023-02-28T00:00:00+00:00");
}

#[test]
fn test_three_and_six_months() {
    let now = at(2025, 8, 15, 6);
    assert_eq!(
        TimeFrame::ThreeMonths.resolve_utc(now).start.to_rfc3339(),
        "2025-05-15T00:00:00+00:00"
    );
    assert_eq!(
        TimeFrame::SixMonths.resolve_utc(now).start.to_rfc3339(),
        "2025-02-15T00:00:00+00:00"
    );
}

#[test]
fn test_all_starts_at_epoch() {
    let window = TimeFrame::All.resolve_utc(at(2025, 3, 1, 9));
    assert_eq!(window.start, DateTime::UNIX_EPOCH);
}

#[test]
fn test_window_bounds_are_inclusive() {
    let window = TimeFrame::OneWeek.resolve_utc(at(2025, 5, 10, 8));
    assert!(window.contains(window.start));
    assert!(window.contains(window.end));
    assert!(!window.contains(window.start - TimeDelta::milliseconds(1)));
    assert!(!window.contains(window.end + TimeDelta::milliseconds(1)));
}

#[test]
fn test_negative_offset_uses_local_day() {
    // 02:00 UTC on the 11th is still the 10th at -05:00
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let window = TimeFrame::OneWeek.resolve(at(2025, 5, 11, 2), offset);
    assert_eq!(window.end.to_rfc3339(), "2025-05-11T04:59:59.999+00:00");
    assert_eq!(window.start.to_rfc3339(), "2025-05-03T05:00:00+00:00");
}

#[test]
fn test_serializes_as_token() {
    assert_eq!(
        serde_json::to_string(&TimeFrame::ThreeMonths).unwrap(),
        "\"3months\""
    );
    let parsed: TimeFrame = serde_json::from_str("\"1year\"").unwrap();
    assert_eq!(parsed, TimeFrame::OneYear);
}
