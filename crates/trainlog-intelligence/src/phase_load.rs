// ABOUTME: Training load grouped by the cycle phase each session fell in
// ABOUTME: Reports sessions, volume and average estimated 1RM per phase plus the heaviest phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::errors::AppResult;
use trainlog_core::models::{CycleConfig, CyclePhase};

use crate::cycle::CyclePhaseCalculator;
use crate::session::ProgressionPoint;
use crate::statistics::{count_to_f64, round_one_decimal};

/// Load accumulated in one phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseLoad {
    /// Sessions dated in the phase
    pub sessions: usize,
    /// Summed session volume
    pub total_volume: f64,
    /// Mean session volume, one decimal
    pub average_volume: f64,
    /// Mean estimated 1RM, one decimal
    pub average_one_rep_max: f64,
    #[serde(skip)]
    one_rep_max_sum: f64,
}

impl PhaseLoad {
    fn record(&mut self, point: &ProgressionPoint) {
        self.sessions += 1;
        self.total_volume += point.total_volume;
        self.one_rep_max_sum += point.estimated_one_rep_max;
    }

    fn finish(&mut self) {
        if self.sessions > 0 {
            let sessions = count_to_f64(self.sessions);
            self.average_volume = round_one_decimal(self.total_volume / sessions);
            self.average_one_rep_max = round_one_decimal(self.one_rep_max_sum / sessions);
        }
    }
}

/// Per-phase load, declared in phase order
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseLoads {
    /// Menstrual phase load
    pub menstrual: PhaseLoad,
    /// Follicular phase load
    pub follicular: PhaseLoad,
    /// Ovulation phase load
    pub ovulation: PhaseLoad,
    /// Early luteal phase load
    pub early_luteal: PhaseLoad,
    /// Late luteal phase load
    pub late_luteal: PhaseLoad,
}

impl PhaseLoads {
    /// Load of one phase
    #[must_use]
    pub const fn get(&self, phase: CyclePhase) -> &PhaseLoad {
        match phase {
            CyclePhase::Menstrual => &self.menstrual,
            CyclePhase::Follicular => &self.follicular,
            CyclePhase::Ovulation => &self.ovulation,
            CyclePhase::EarlyLuteal => &self.early_luteal,
            CyclePhase::LateLuteal => &self.late_luteal,
        }
    }

    fn get_mut(&mut self, phase: CyclePhase) -> &mut PhaseLoad {
        match phase {
            CyclePhase::Menstrual => &mut self.menstrual,
            CyclePhase::Follicular => &mut self.follicular,
            CyclePhase::Ovulation => &mut self.ovulation,
            CyclePhase::EarlyLuteal => &mut self.early_luteal,
            CyclePhase::LateLuteal => &mut self.late_luteal,
        }
    }

    /// `(phase, load)` pairs in phase order
    pub fn iter(&self) -> impl Iterator<Item = (CyclePhase, &PhaseLoad)> + '_ {
        CyclePhase::ALL.into_iter().map(|phase| (phase, self.get(phase)))
    }
}

/// Training load report across the cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseLoadStatistics {
    /// Load per phase
    pub phases: PhaseLoads,
    /// Number of points analysed
    pub total_sessions: usize,
    /// Phase with the strictly highest total volume, earliest phase on ties
    pub highest_volume_phase: Option<CyclePhase>,
}

/// Groups progression points by cycle phase
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseLoadAnalyzer;

impl PhaseLoadAnalyzer {
    /// Bucket each point by the phase of its local date
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error if the cycle configuration is invalid
    pub fn analyze(
        points: &[ProgressionPoint],
        config: &CycleConfig,
    ) -> AppResult<PhaseLoadStatistics> {
        let calculator = CyclePhaseCalculator::new(config)?;

        let mut phases = PhaseLoads::default();
        for point in points {
            let day = calculator.phase_for_instant(point.date)?;
            phases.get_mut(day.phase).record(point);
        }
        for phase in CyclePhase::ALL {
            phases.get_mut(phase).finish();
        }

        let highest_volume_phase = phases
            .iter()
            .filter(|(_, load)| load.sessions > 0)
            .fold(None, |best: Option<(CyclePhase, f64)>, (phase, load)| match best {
                Some((_, volume)) if load.total_volume <= volume => best,
                _ => Some((phase, load.total_volume)),
            })
            .map(|(phase, _)| phase);

        debug!(
            points = points.len(),
            highest_volume_phase = ?highest_volume_phase,
            "Computed training load by phase"
        );

        Ok(PhaseLoadStatistics {
            phases,
            total_sessions: points.len(),
            highest_volume_phase,
        })
    }
}
