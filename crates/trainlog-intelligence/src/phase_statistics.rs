// ABOUTME: Buckets dated events into cycle phases and reports counts and the dominant phase
// ABOUTME: Used to correlate injuries and symptoms with where in the cycle they happen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::errors::AppResult;
use trainlog_core::models::{CycleConfig, CyclePhase, DatedEvent};

use crate::cycle::CyclePhaseCalculator;

/// Event count per phase
///
/// Fields are declared in phase order so every serialized form lists all five
/// phases, zeros included, in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseCounts {
    /// Events in the menstrual phase
    pub menstrual: usize,
    /// Events in the follicular phase
    pub follicular: usize,
    /// Events around ovulation
    pub ovulation: usize,
    /// Events in the early luteal phase
    pub early_luteal: usize,
    /// Events in the late luteal phase
    pub late_luteal: usize,
}

impl PhaseCounts {
    /// Count for one phase
    #[must_use]
    pub const fn get(&self, phase: CyclePhase) -> usize {
        match phase {
            CyclePhase::Menstrual => self.menstrual,
            CyclePhase::Follicular => self.follicular,
            CyclePhase::Ovulation => self.ovulation,
            CyclePhase::EarlyLuteal => self.early_luteal,
            CyclePhase::LateLuteal => self.late_luteal,
        }
    }

    fn increment(&mut self, phase: CyclePhase) {
        let slot = match phase {
            CyclePhase::Menstrual => &mut self.menstrual,
            CyclePhase::Follicular => &mut self.follicular,
            CyclePhase::Ovulation => &mut self.ovulation,
            CyclePhase::EarlyLuteal => &mut self.early_luteal,
            CyclePhase::LateLuteal => &mut self.late_luteal,
        };
        *slot += 1;
    }

    /// `(phase, count)` pairs in phase order
    pub fn iter(&self) -> impl Iterator<Item = (CyclePhase, usize)> + '_ {
        CyclePhase::ALL.into_iter().map(|phase| (phase, self.get(phase)))
    }

    /// Sum over all phases
    #[must_use]
    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Phase with the strictly highest count, earliest phase on ties
    #[must_use]
    pub fn dominant(&self) -> Option<CyclePhase> {
        self.iter()
            .fold(None, |best: Option<(CyclePhase, usize)>, (phase, count)| {
                match best {
                    Some((_, best_count)) if count <= best_count => best,
                    _ if count == 0 => best,
                    _ => Some((phase, count)),
                }
            })
            .map(|(phase, _)| phase)
    }
}

/// Phase correlation report for a set of events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseStatistics {
    /// Per-phase counts
    pub counts: PhaseCounts,
    /// Number of events analysed
    pub total_events: usize,
    /// Phase holding the most events, absent when there are none
    pub dominant_phase: Option<CyclePhase>,
    /// Whole days from the latest event to `today`; negative for future-dated events
    pub days_since_last_event: Option<i64>,
}

/// Correlates dated events with cycle phases
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseCorrelationAnalyzer;

impl PhaseCorrelationAnalyzer {
    /// Bucket every event by the phase of its date
    ///
    /// Events are not filtered here; callers select the category beforehand.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error if the cycle configuration is invalid
    pub fn analyze(
        events: &[DatedEvent],
        config: &CycleConfig,
        today: NaiveDate,
    ) -> AppResult<PhaseStatistics> {
        let calculator = CyclePhaseCalculator::new(config)?;

        let mut counts = PhaseCounts::default();
        for event in events {
            counts.increment(calculator.phase_for_date(event.date)?.phase);
        }

        let days_since_last_event = events
            .iter()
            .map(|event| event.date)
            .max()
            .map(|latest| today.signed_duration_since(latest).num_days());

        let dominant_phase = counts.dominant();
        debug!(
            events = events.len(),
            dominant_phase = ?dominant_phase,
            "Computed phase correlation"
        );

        Ok(PhaseStatistics {
            counts,
            total_events: events.len(),
            dominant_phase,
            days_since_last_event,
        })
    }
}
