// ABOUTME: Cycle phase calculator mapping calendar dates to cycle day and named phase
// ABOUTME: Scales the 28-day reference partition to any cycle length without gaps or overlap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Cycle phase model
//!
//! The 28-day reference partition is menstrual 1-7, follicular 8-12,
//! ovulation 13-16, early luteal 17-20 and late luteal 21-28. For other
//! lengths each reference end day is scaled by `length / 28` and floored;
//! late luteal always ends on the last day and absorbs the remainder.
//! Very short cycles can leave early bands empty, but every day of the
//! cycle still belongs to exactly one phase.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use trainlog_core::constants::cycle::{REFERENCE_CYCLE_LENGTH_DAYS, REFERENCE_PHASE_END_DAYS};
use trainlog_core::errors::{AppError, AppResult};
use trainlog_core::models::{CycleConfig, CyclePhase};

/// Inclusive range of cycle days belonging to one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseBand {
    /// Phase covered by the band
    pub phase: CyclePhase,
    /// First cycle day of the band
    pub start_day: u32,
    /// Last cycle day of the band; below `start_day` when the band is empty
    pub end_day: u32,
}

impl PhaseBand {
    /// Number of days in the band
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end_day.saturating_add(1).saturating_sub(self.start_day)
    }

    /// Whether the cycle is too short for this band to hold any day
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end_day < self.start_day
    }

    /// Whether the cycle day falls in the band
    #[must_use]
    pub const fn contains(&self, cycle_day: u32) -> bool {
        cycle_day >= self.start_day && cycle_day <= self.end_day
    }
}

/// Phase bands for a cycle length, in phase order
///
/// A zero length yields five empty bands.
#[must_use]
pub fn phase_bands(cycle_length_days: u32) -> [PhaseBand; 5] {
    let mut bands = [PhaseBand {
        phase: CyclePhase::Menstrual,
        start_day: 1,
        end_day: 0,
    }; 5];
    let mut previous_end = 0_u32;
    for (index, phase) in CyclePhase::ALL.into_iter().enumerate() {
        let end_day = if phase == CyclePhase::LateLuteal {
            cycle_length_days
        } else {
            let scaled = u64::from(REFERENCE_PHASE_END_DAYS[index]) * u64::from(cycle_length_days)
                / u64::from(REFERENCE_CYCLE_LENGTH_DAYS);
            u32::try_from(scaled).unwrap_or(cycle_length_days)
        };
        bands[index] = PhaseBand {
            phase,
            start_day: previous_end + 1,
            end_day,
        };
        previous_end = previous_end.max(end_day);
    }
    bands
}

/// Phase of a cycle day, `None` when the day is outside `[1, cycle_length_days]`
#[must_use]
pub fn phase_for_cycle_day(cycle_day: u32, cycle_length_days: u32) -> Option<CyclePhase> {
    if cycle_day == 0 || cycle_day > cycle_length_days {
        return None;
    }
    phase_in_bands(&phase_bands(cycle_length_days), cycle_day)
}

fn phase_in_bands(bands: &[PhaseBand; 5], cycle_day: u32) -> Option<CyclePhase> {
    bands
        .iter()
        .find(|band| band.contains(cycle_day))
        .map(|band| band.phase)
}

/// Cycle position of one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleDay {
    /// 1-based day within the cycle
    pub cycle_day: u32,
    /// Phase of that day
    pub phase: CyclePhase,
    /// True when the date precedes the confirmed reference start
    pub is_forecast: bool,
}

/// Cycle position plus what comes next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSnapshot {
    /// Date described
    pub date: NaiveDate,
    /// 1-based day within the cycle
    pub cycle_day: u32,
    /// Phase of that day
    pub phase: CyclePhase,
    /// True when the date precedes the confirmed reference start
    pub is_forecast: bool,
    /// The next phase with at least one day
    pub next_phase: CyclePhase,
    /// Days from `date` until `next_phase` begins
    pub days_until_next_phase: u32,
    /// First day of the following cycle
    pub next_cycle_start: NaiveDate,
    /// Days from `date` until `next_cycle_start`
    pub days_until_next_cycle: u32,
}

/// One entry of a phase calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Calendar date
    pub date: NaiveDate,
    /// 1-based day within the cycle
    pub cycle_day: u32,
    /// Phase of that day
    pub phase: CyclePhase,
    /// True when the date precedes the confirmed reference start
    pub is_forecast: bool,
}

/// Calculator bound to one validated cycle configuration
#[derive(Debug, Clone)]
pub struct CyclePhaseCalculator {
    config: CycleConfig,
    bands: [PhaseBand; 5],
}

impl CyclePhaseCalculator {
    /// Validate the configuration and precompute its phase bands
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error if the cycle length is zero or
    /// the UTC offset is out of range
    pub fn new(config: &CycleConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            bands: phase_bands(config.cycle_length_days),
        })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Phase bands for the configured length
    #[must_use]
    pub const fn bands(&self) -> &[PhaseBand; 5] {
        &self.bands
    }

    /// Cycle day and phase of a local calendar date
    ///
    /// Dates before the reference start wrap backwards into earlier cycles
    /// and are flagged as forecasts.
    ///
    /// # Errors
    ///
    /// Only fails if the precomputed bands do not cover the day, which
    /// indicates an internal inconsistency
    pub fn phase_for_date(&self, date: NaiveDate) -> AppResult<CycleDay> {
        let length = i64::from(self.config.cycle_length_days);
        let days_since = date
            .signed_duration_since(self.config.reference_start_date)
            .num_days();
        let cycle_day = u32::try_from(days_since.rem_euclid(length) + 1).map_err(|_| {
            AppError::internal(format!("cycle day out of range for {date}"))
        })?;
        let phase = phase_in_bands(&self.bands, cycle_day).ok_or_else(|| {
            AppError::internal(format!(
                "no phase covers day {cycle_day} of a {length}-day cycle"
            ))
        })?;
        Ok(CycleDay {
            cycle_day,
            phase,
            is_forecast: date < self.config.reference_start_date,
        })
    }

    /// Cycle day and phase of an instant, read in the configured local offset
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error if the offset is out of range
    pub fn phase_for_instant(&self, instant: DateTime<Utc>) -> AppResult<CycleDay> {
        let offset = self.config.offset()?;
        self.phase_for_date(instant.with_timezone(&offset).date_naive())
    }

    /// Current position plus the upcoming phase change and next cycle start
    ///
    /// # Errors
    ///
    /// Propagates errors from [`CyclePhaseCalculator::phase_for_date`]
    pub fn snapshot(&self, date: NaiveDate) -> AppResult<CycleSnapshot> {
        let today = self.phase_for_date(date)?;
        let length = self.config.cycle_length_days;
        let days_until_next_cycle = length - today.cycle_day + 1;

        // Next non-empty band after today's, else the first band of the next cycle
        let later_band = self
            .bands
            .iter()
            .filter(|band| !band.is_empty())
            .find(|band| band.start_day > today.cycle_day)
            .map(|band| (band.phase, band.start_day - today.cycle_day));
        let wrapped_band = || {
            self.bands
                .iter()
                .find(|band| !band.is_empty() && band.phase != today.phase)
                .map(|band| {
                    (
                        band.phase,
                        days_until_next_cycle.saturating_add(band.start_day - 1),
                    )
                })
        };
        let (next_phase, days_until_next_phase) = later_band
            .or_else(wrapped_band)
            .unwrap_or((today.phase, days_until_next_cycle));

        let next_cycle_start = date
            .checked_add_days(Days::new(u64::from(days_until_next_cycle)))
            .ok_or_else(|| AppError::invalid_input(format!("date {date} is out of range")))?;

        Ok(CycleSnapshot {
            date,
            cycle_day: today.cycle_day,
            phase: today.phase,
            is_forecast: today.is_forecast,
            next_phase,
            days_until_next_phase,
            next_cycle_start,
            days_until_next_cycle,
        })
    }

    /// Phase of every date in `[from, to]`; empty when `from > to`
    ///
    /// # Errors
    ///
    /// Propagates errors from [`CyclePhaseCalculator::phase_for_date`]
    pub fn calendar(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<CalendarDay>> {
        let days = from
            .iter_days()
            .take_while(|date| *date <= to)
            .map(|date| {
                self.phase_for_date(date).map(|day| CalendarDay {
                    date,
                    cycle_day: day.cycle_day,
                    phase: day.phase,
                    is_forecast: day.is_forecast,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;
        debug!(from = %from, to = %to, days = days.len(), "Built phase calendar");
        Ok(days)
    }
}

/// Cycle day and phase of a date for a configuration
///
/// # Errors
///
/// Returns an `InvalidConfiguration` error if the configuration is invalid
pub fn cycle_phase_for_date(config: &CycleConfig, date: NaiveDate) -> AppResult<CycleDay> {
    CyclePhaseCalculator::new(config)?.phase_for_date(date)
}

/// Cycle snapshot of a date for a configuration
///
/// # Errors
///
/// Returns an `InvalidConfiguration` error if the configuration is invalid
pub fn cycle_snapshot(config: &CycleConfig, date: NaiveDate) -> AppResult<CycleSnapshot> {
    CyclePhaseCalculator::new(config)?.snapshot(date)
}

/// Phase calendar over `[from, to]` for a configuration
///
/// # Errors
///
/// Returns an `InvalidConfiguration` error if the configuration is invalid
pub fn phase_calendar(
    config: &CycleConfig,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<CalendarDay>> {
    CyclePhaseCalculator::new(config)?.calendar(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_partition_is_unscaled() {
        let ends: Vec<u32> = phase_bands(28).iter().map(|band| band.end_day).collect();
        assert_eq!(ends, vec![7, 12, 16, 20, 28]);
    }

    #[test]
    fn test_long_cycle_remainder_goes_to_late_luteal() {
        let bands = phase_bands(35);
        let ends: Vec<u32> = bands.iter().map(|band| band.end_day).collect();
        assert_eq!(ends, vec![8, 15, 20, 25, 35]);
        assert_eq!(bands[4].len(), 10);
    }

    #[test]
    fn test_single_day_cycle_is_all_late_luteal() {
        let bands = phase_bands(1);
        assert!(bands[..4].iter().all(PhaseBand::is_empty));
        assert_eq!(phase_for_cycle_day(1, 1), Some(CyclePhase::LateLuteal));
    }

    #[test]
    fn test_out_of_range_cycle_day() {
        assert_eq!(phase_for_cycle_day(0, 28), None);
        assert_eq!(phase_for_cycle_day(29, 28), None);
    }
}
