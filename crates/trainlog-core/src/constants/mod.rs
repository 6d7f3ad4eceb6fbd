// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Formula coefficients, cycle reference partition and reporting thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by the analytics component that owns them.

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the CLI and the logging layer
    pub const TRAINLOG: &str = "trainlog";
}

/// One-repetition maximum estimation
pub mod strength {
    /// Lower bound of the effective rep count fed into the formulas
    pub const MIN_EFFECTIVE_REPS: u32 = 1;
    /// Upper bound of the effective rep count; higher counts saturate here
    pub const MAX_EFFECTIVE_REPS: u32 = 30;

    /// Epley: `w * (1 + r / 30)`
    pub const EPLEY_DIVISOR: f64 = 30.0;
    /// Brzycki: `w * 36 / (37 - r)`
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;
    /// Brzycki denominator offset
    pub const BRZYCKI_OFFSET: f64 = 37.0;
    /// Lombardi: `w * r^0.10`
    pub const LOMBARDI_EXPONENT: f64 = 0.10;
    /// O'Conner: `w * (1 + r / 40)`
    pub const OCONNER_DIVISOR: f64 = 40.0;
}

/// Progression summary thresholds
pub mod progression {
    /// Minimum number of progression points before an improvement trend is reported
    pub const MIN_POINTS_FOR_TREND: usize = 4;
}

/// Biological cycle model
pub mod cycle {
    /// Cycle length the reference phase partition is expressed in
    pub const REFERENCE_CYCLE_LENGTH_DAYS: u32 = 28;

    /// Last cycle day of each phase in a 28-day cycle, in phase order.
    ///
    /// Widths are 7, 5, 4, 4 and 8 days.
    pub const REFERENCE_PHASE_END_DAYS: [u32; 5] = [7, 12, 16, 20, 28];

    /// Default cycle length when none is configured
    pub const DEFAULT_CYCLE_LENGTH_DAYS: u32 = 28;

    /// Typical lower bound of a healthy cycle length
    pub const TYPICAL_MIN_CYCLE_LENGTH_DAYS: u32 = 21;
    /// Typical upper bound of a healthy cycle length
    pub const TYPICAL_MAX_CYCLE_LENGTH_DAYS: u32 = 35;

    /// Largest accepted UTC offset magnitude, in minutes (18 hours)
    pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;
}

/// Reps-in-reserve self report
pub mod rir {
    /// Highest reps-in-reserve value a set can carry
    pub const MAX_REPS_IN_RESERVE: u8 = 10;
}
