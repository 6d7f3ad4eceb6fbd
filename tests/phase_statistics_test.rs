// ABOUTME: Tests for phase-correlation statistics over dated events
// ABOUTME: Covers fixed phase ordering, dominant-phase tie-break and days since the last event
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp, clippy::missing_panics_doc)]

mod common;

use common::{cycle_config, date, events_on, init_test_logging};
use trainlog::intelligence::PhaseCorrelationAnalyzer;
use trainlog::models::{CycleConfig, CyclePhase, DatedEvent};

fn config() -> CycleConfig {
    init_test_logging();
    cycle_config(28, date(2025, 3, 1))
}

#[test]
fn test_empty_events() {
    let stats = PhaseCorrelationAnalyzer::analyze(&[], &config(), date(2025, 4, 1)).unwrap();
    assert_eq!(stats.total_events, 0);
    assert_eq!(stats.counts.total(), 0);
    assert!(stats.dominant_phase.is_none());
    assert!(stats.days_since_last_event.is_none());
    assert!(stats.counts.iter().all(|(_, count)| count == 0));
}

#[test]
fn test_tie_resolves_to_earlier_phase() {
    // Days 1-3 are menstrual, days 8-10 follicular
    let events = events_on(&[
        date(2025, 3, 1),
        date(2025, 3, 2),
        date(2025, 3, 3),
        date(2025, 3, 8),
        date(2025, 3, 9),
        date(2025, 3, 10),
    ]);
    let stats = PhaseCorrelationAnalyzer::analyze(&events, &config(), date(2025, 3, 20)).unwrap();

    assert_eq!(stats.counts.menstrual, 3);
    assert_eq!(stats.counts.follicular, 3);
    assert_eq!(stats.dominant_phase, Some(CyclePhase::Menstrual));
    assert_eq!(stats.total_events, 6);
}

#[test]
fn test_strict_majority_wins() {
    let events = events_on(&[date(2025, 3, 2), date(2025, 3, 22), date(2025, 3, 23)]);
    let stats = PhaseCorrelationAnalyzer::analyze(&events, &config(), date(2025, 3, 30)).unwrap();
    assert_eq!(stats.counts.get(CyclePhase::LateLuteal), 2);
    assert_eq!(stats.dominant_phase, Some(CyclePhase::LateLuteal));
}

#[test]
fn test_events_in_earlier_cycles_use_wrapped_day() {
    // 2025-02-27 is day 27 of the previous cycle
    let events = events_on(&[date(2025, 2, 27)]);
    let stats = PhaseCorrelationAnalyzer::analyze(&events, &config(), date(2025, 3, 1)).unwrap();
    assert_eq!(stats.counts.late_luteal, 1);
}

#[test]
fn test_days_since_last_event() {
    let events = events_on(&[date(2025, 3, 2), date(2025, 3, 14), date(2025, 3, 5)]);
    let stats = PhaseCorrelationAnalyzer::analyze(&events, &config(), date(2025, 3, 20)).unwrap();
    assert_eq!(stats.days_since_last_event, Some(6));

    let same_day = PhaseCorrelationAnalyzer::analyze(&events, &config(), date(2025, 3, 14)).unwrap();
    assert_eq!(same_day.days_since_last_event, Some(0));
}

#[test]
fn test_future_event_gives_negative_days() {
    let events = events_on(&[date(2025, 3, 25)]);
    let stats = PhaseCorrelationAnalyzer::analyze(&events, &config(), date(2025, 3, 20)).unwrap();
    assert_eq!(stats.days_since_last_event, Some(-5));
}

#[test]
fn test_categories_are_not_filtered() {
    let events = vec![
        DatedEvent::with_category(date(2025, 3, 2), "injury"),
        DatedEvent::with_category(date(2025, 3, 3), "symptom"),
    ];
    let stats = PhaseCorrelationAnalyzer::analyze(&events, &config(), date(2025, 3, 20)).unwrap();
    assert_eq!(stats.total_events, 2);
}

#[test]
fn test_invalid_configuration_is_rejected() {
    let invalid = CycleConfig {
        cycle_length_days: 0,
        reference_start_date: date(2025, 3, 1),
        utc_offset_minutes: 0,
    };
    let error = PhaseCorrelationAnalyzer::analyze(&events_on(&[date(2025, 3, 2)]), &invalid, date(2025, 3, 20))
        .unwrap_err();
    assert!(error.is_invalid_configuration());
}

#[test]
fn test_counts_serialize_in_phase_order() {
    let events = events_on(&[date(2025, 3, 13)]);
    let stats = PhaseCorrelationAnalyzer::analyze(&events, &config(), date(2025, 3, 20)).unwrap();
    assert_eq!(
        serde_json::to_string(&stats.counts).unwrap(),
        r#"{"menstrual":0,"follicular":0,"ovulation":1,"earlyLuteal":0,"lateLuteal":0}"#
    );
    let phases: Vec<CyclePhase> = stats.counts.iter().map(|(phase, _)| phase).collect();
    assert_eq!(phases, CyclePhase::ALL.to_vec());
}
