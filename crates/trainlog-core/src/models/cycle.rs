// ABOUTME: Biological cycle models: phase enumeration and per-user cycle configuration
// ABOUTME: CycleConfig validation rejects configurations the phase math cannot handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::cycle::{
    DEFAULT_CYCLE_LENGTH_DAYS, MAX_UTC_OFFSET_MINUTES, TYPICAL_MAX_CYCLE_LENGTH_DAYS,
    TYPICAL_MIN_CYCLE_LENGTH_DAYS,
};
use crate::dates::parse_date;
use crate::errors::{AppError, AppResult};

/// Named phase of the cycle
///
/// Variants are declared in cycle-day order; `Ord` follows that order and is
/// what tie-breaks rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CyclePhase {
    /// Bleeding days at the start of the cycle
    Menstrual,
    /// Post-menstrual rise in estrogen
    Follicular,
    /// Days around ovulation
    Ovulation,
    /// First half of the luteal phase
    EarlyLuteal,
    /// Second half of the luteal phase, up to the next cycle
    LateLuteal,
}

impl CyclePhase {
    /// All phases in cycle-day order
    pub const ALL: [Self; 5] = [
        Self::Menstrual,
        Self::Follicular,
        Self::Ovulation,
        Self::EarlyLuteal,
        Self::LateLuteal,
    ];

    /// Position in [`CyclePhase::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Menstrual => 0,
            Self::Follicular => 1,
            Self::Ovulation => 2,
            Self::EarlyLuteal => 3,
            Self::LateLuteal => 4,
        }
    }

    /// API string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Menstrual => "menstrual",
            Self::Follicular => "follicular",
            Self::Ovulation => "ovulation",
            Self::EarlyLuteal => "earlyLuteal",
            Self::LateLuteal => "lateLuteal",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Menstrual => "Menstrual",
            Self::Follicular => "Follicular",
            Self::Ovulation => "Ovulation",
            Self::EarlyLuteal => "Early luteal",
            Self::LateLuteal => "Late luteal",
        }
    }

    /// Phase following this one; late luteal wraps to menstrual
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Menstrual => Self::Follicular,
            Self::Follicular => Self::Ovulation,
            Self::Ovulation => Self::EarlyLuteal,
            Self::EarlyLuteal => Self::LateLuteal,
            Self::LateLuteal => Self::Menstrual,
        }
    }
}

impl fmt::Display for CyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CyclePhase {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "menstrual" => Ok(Self::Menstrual),
            "follicular" => Ok(Self::Follicular),
            "ovulation" => Ok(Self::Ovulation),
            "earlyluteal" => Ok(Self::EarlyLuteal),
            "lateluteal" => Ok(Self::LateLuteal),
            _ => Err(AppError::invalid_input(format!("Unknown cycle phase: {s}"))),
        }
    }
}

/// Cycle configuration of one user
///
/// `reference_start_date` is the most recent confirmed cycle start. Dates are
/// interpreted in the user's local day, described by a fixed UTC offset.
///
/// # Examples
///
/// ```rust
/// use trainlog_core::models::CycleConfig;
///
/// let config = CycleConfig::parse(28, "2025-03-01", 60).unwrap();
/// assert_eq!(config.cycle_length_days, 28);
/// assert!(CycleConfig::parse(0, "2025-03-01", 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Cycle length in days (typically 21-35, must be >= 1)
    pub cycle_length_days: u32,
    /// Most recent confirmed cycle start
    pub reference_start_date: NaiveDate,
    /// Offset of the user's local time from UTC, in minutes
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl CycleConfig {
    /// Create and validate a configuration
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error if the cycle length is zero or
    /// the UTC offset is beyond +/-18 hours
    pub fn new(
        cycle_length_days: u32,
        reference_start_date: NaiveDate,
        utc_offset_minutes: i32,
    ) -> AppResult<Self> {
        let config = Self {
            cycle_length_days,
            reference_start_date,
            utc_offset_minutes,
        };
        config.validate()?;
        if !(TYPICAL_MIN_CYCLE_LENGTH_DAYS..=TYPICAL_MAX_CYCLE_LENGTH_DAYS)
            .contains(&cycle_length_days)
        {
            warn!(
                cycle_length_days,
                "Cycle length outside the typical {TYPICAL_MIN_CYCLE_LENGTH_DAYS}-{TYPICAL_MAX_CYCLE_LENGTH_DAYS} day range"
            );
        }
        Ok(config)
    }

    /// Create a configuration with the default 28-day length in UTC
    ///
    /// # Errors
    ///
    /// Never fails for the default length; kept fallible for symmetry with [`CycleConfig::new`]
    pub fn with_default_length(reference_start_date: NaiveDate) -> AppResult<Self> {
        Self::new(DEFAULT_CYCLE_LENGTH_DAYS, reference_start_date, 0)
    }

    /// Create a configuration from a raw date string
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error if the date cannot be parsed or
    /// the configuration fails validation
    pub fn parse(
        cycle_length_days: i64,
        reference_start_date: &str,
        utc_offset_minutes: i32,
    ) -> AppResult<Self> {
        let length = u32::try_from(cycle_length_days)
            .ok()
            .filter(|length| *length >= 1)
            .ok_or_else(|| {
                AppError::invalid_configuration(format!(
                    "cycle_length_days must be at least 1, got {cycle_length_days}"
                ))
                .with_field("cycle_length_days")
            })?;
        let reference = parse_date(reference_start_date)
            .map_err(|e| e.with_field("reference_start_date"))?;
        Self::new(length, reference, utc_offset_minutes)
    }

    /// Check the invariants the phase math depends on
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error describing the first violated invariant
    pub fn validate(&self) -> AppResult<()> {
        if self.cycle_length_days < 1 {
            return Err(AppError::invalid_configuration(format!(
                "cycle_length_days must be at least 1, got {}",
                self.cycle_length_days
            ))
            .with_field("cycle_length_days"));
        }
        if self.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(AppError::invalid_configuration(format!(
                "utc_offset_minutes must be within +/-{MAX_UTC_OFFSET_MINUTES}, got {}",
                self.utc_offset_minutes
            ))
            .with_field("utc_offset_minutes"));
        }
        Ok(())
    }

    /// The configured local offset
    ///
    /// # Errors
    ///
    /// Returns an `InvalidConfiguration` error if the offset is out of range
    pub fn offset(&self) -> AppResult<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).ok_or_else(|| {
            AppError::invalid_configuration(format!(
                "utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
            .with_field("utc_offset_minutes")
        })
    }
}
