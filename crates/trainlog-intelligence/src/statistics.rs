// ABOUTME: Small numeric helpers shared by the analyzers
// ABOUTME: One-decimal rounding, means and safe count conversions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round to one decimal place, halves rounding up (towards positive infinity)
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.mul_add(10.0, 0.5).floor() / 10.0
}

/// Convert a collection length to `f64`
#[inline]
#[must_use]
pub fn count_to_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}

/// Arithmetic mean; 0 for an empty input
#[must_use]
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count_to_f64(count)
    }
}

/// Arithmetic mean; `None` for an empty input
#[must_use]
pub fn mean_opt(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count_to_f64(count))
}

/// Largest value; 0 for an empty input
#[must_use]
pub fn max_or_zero(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(None, |best: Option<f64>, value| {
        Some(best.map_or(value, |b| b.max(value)))
    })
    .unwrap_or(0.0)
}
