// ABOUTME: Resolves symbolic timeframe tokens into concrete instant windows
// ABOUTME: Windows span whole local days: start-of-day N back from today through end of today
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{
    DateTime, Days, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta,
    Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use trainlog_core::errors::AppError;

/// Lookback period for progression analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFrame {
    /// Last 7 days
    #[serde(rename = "1week")]
    OneWeek,
    /// Last calendar month
    #[serde(rename = "1month")]
    OneMonth,
    /// Last 3 calendar months
    #[default]
    #[serde(rename = "3months")]
    ThreeMonths,
    /// Last 6 calendar months
    #[serde(rename = "6months")]
    SixMonths,
    /// Last 12 calendar months
    #[serde(rename = "1year")]
    OneYear,
    /// Entire history since the Unix epoch
    #[serde(rename = "all")]
    All,
}

impl TimeFrame {
    /// Every supported timeframe, shortest first
    pub const ALL_TIMEFRAMES: [Self; 6] = [
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
        Self::All,
    ];

    /// Token used by the API and reported back on summaries
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneWeek => "1week",
            Self::OneMonth => "1month",
            Self::ThreeMonths => "3months",
            Self::SixMonths => "6months",
            Self::OneYear => "1year",
            Self::All => "all",
        }
    }

    /// First local day of the window for the given local "today"
    fn start_day(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::OneWeek => today.checked_sub_days(Days::new(7)),
            Self::OneMonth => today.checked_sub_months(Months::new(1)),
            Self::ThreeMonths => today.checked_sub_months(Months::new(3)),
            Self::SixMonths => today.checked_sub_months(Months::new(6)),
            Self::OneYear => today.checked_sub_months(Months::new(12)),
            Self::All => None,
        }
    }

    /// Resolve the window ending today in the given local offset
    #[must_use]
    pub fn resolve(self, now: DateTime<Utc>, offset: FixedOffset) -> DateWindow {
        let today = now.with_timezone(&offset).date_naive();
        let end = end_of_day(today, offset);
        let start = match self {
            Self::All => DateTime::UNIX_EPOCH,
            _ => self
                .start_day(today)
                .map_or(DateTime::<Utc>::MIN_UTC, |day| start_of_day(day, offset)),
        };
        DateWindow { start, end }
    }

    /// Resolve the window using UTC days
    #[must_use]
    pub fn resolve_utc(self, now: DateTime<Utc>) -> DateWindow {
        self.resolve(now, Utc.fix())
    }
}

fn local_to_utc(local: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    local
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
        .map_or(DateTime::<Utc>::MIN_UTC, |naive| naive.and_utc())
}

fn start_of_day(day: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    local_to_utc(day.and_time(NaiveTime::MIN), offset)
}

fn end_of_day(day: NaiveDate, offset: FixedOffset) -> DateTime<Utc> {
    day.checked_add_days(Days::new(1)).map_or(DateTime::<Utc>::MAX_UTC, |next| {
        start_of_day(next, offset) - TimeDelta::milliseconds(1)
    })
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFrame {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1week" => Ok(Self::OneWeek),
            "1month" => Ok(Self::OneMonth),
            "3months" => Ok(Self::ThreeMonths),
            "6months" => Ok(Self::SixMonths),
            "1year" => Ok(Self::OneYear),
            "all" => Ok(Self::All),
            _ => Err(AppError::invalid_configuration(format!(
                "Unknown timeframe '{s}', expected one of 1week, 1month, 3months, 6months, 1year, all"
            ))
            .with_field("timeframe")),
        }
    }
}

/// Inclusive instant range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// First instant inside the window
    pub start: DateTime<Utc>,
    /// Last instant inside the window
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Whether the instant falls inside the window (both ends inclusive)
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_end_of_day_is_last_millisecond() {
        let now = Utc.with_ymd_and_hms(2025, 5, 10, 8, 0, 0).unwrap();
        let window = TimeFrame::OneWeek.resolve_utc(now);
        assert_eq!(window.end.to_rfc3339(), "2025-05-10T23:59:59.999+00:00");
        assert_eq!(window.start.to_rfc3339(), "2025-05-03T00:00:00+00:00");
    }

    #[test]
    fn test_local_offset_moves_day_boundaries() {
        // 23:30 UTC is already the next day at +02:00
        let now = Utc.with_ymd_and_hms(2025, 5, 10, 23, 30, 0).unwrap();
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let window = TimeFrame::OneWeek.resolve(now, offset);
        assert_eq!(window.end.to_rfc3339(), "2025-05-11T21:59:59.999+00:00");
        assert_eq!(window.start.to_rfc3339(), "2025-05-03T22:00:00+00:00");
    }
}
