//! Salary continuation table lookup.
//!
//! A deterministic, table-driven sibling of the protection engine: given the
//! employment start date, the date of the triggering event and a cantonal
//! scale, it returns the salary continuation duration in days, plus a helper
//! that decomposes a day count into weeks and 30-day months.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// The cantonal salary continuation scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// The Basel scale.
    Basel,
    /// The Bern scale.
    Bern,
    /// The Zurich scale.
    Zurich,
}

impl FromStr for Scale {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basel" => Ok(Scale::Basel),
            "bern" => Ok(Scale::Bern),
            "zurich" | "zürich" => Ok(Scale::Zurich),
            _ => Err(EngineError::UnrecognizedScale {
                scale: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Scale::Basel => "basel",
            Scale::Bern => "bern",
            Scale::Zurich => "zurich",
        };
        write!(f, "{token}")
    }
}

/// A day count decomposed into weeks and 30-day months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBreakdown {
    /// Complete weeks.
    pub weeks: i64,
    /// Days remaining after the complete weeks.
    pub remaining_days: i64,
    /// Complete 30-day months.
    pub months: i64,
    /// Days remaining after the complete months.
    pub remaining_days_in_month: i64,
}

/// Computes completed years of service between two dates.
///
/// Calendar-exact: the year difference is decremented when the anniversary
/// of the start date has not yet passed at the event date.
pub fn service_years(start_date: NaiveDate, event_date: NaiveDate) -> i64 {
    let mut years = i64::from(event_date.year() - start_date.year());
    if event_date.month() < start_date.month()
        || (event_date.month() == start_date.month() && event_date.day() < start_date.day())
    {
        years -= 1;
    }
    years
}

/// Looks up the salary continuation duration in days.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] when the start date is after the
/// event date. Under one full year of service every scale yields 0 days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use worksafe_engine::salary::{continuation_days, Scale};
///
/// let start = NaiveDate::from_ymd_opt(2010, 4, 1).unwrap();
/// let event = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
/// // 13 completed years of service on the Bern scale.
/// assert_eq!(continuation_days(start, event, Scale::Bern).unwrap(), 120);
/// ```
pub fn continuation_days(
    start_date: NaiveDate,
    event_date: NaiveDate,
    scale: Scale,
) -> EngineResult<i64> {
    if start_date > event_date {
        return Err(EngineError::InvalidArgument {
            field: "start_date".to_string(),
            message: "cannot be after the event date".to_string(),
        });
    }

    let years = service_years(start_date, event_date);
    let days = match scale {
        Scale::Basel => basel_days(years),
        Scale::Bern => bern_days(years),
        Scale::Zurich => zurich_days(years),
    };
    Ok(days)
}

fn basel_days(years: i64) -> i64 {
    match years {
        1 => 21,
        2..=3 => 60,
        4..=10 => 90,
        11..=15 => 120,
        16..=20 => 150,
        21..=24 => 180,
        25.. => 180 + ((years - 25) / 5) * 30,
        _ => 0,
    }
}

fn bern_days(years: i64) -> i64 {
    match years {
        1 => 21,
        2 => 30,
        3..=4 => 60,
        5..=9 => 90,
        10..=14 => 120,
        15..=19 => 150,
        20.. => 180,
        _ => 0,
    }
}

fn zurich_days(years: i64) -> i64 {
    match years {
        1 => 21,
        2 => 56,
        3 => 63,
        4 => 70,
        5..=10 => 77 + (years - 5) * 7,
        11..=15 => 119 + (years - 11) * 7,
        16..=20 => 154 + (years - 16) * 7,
        21.. => 189 + (years - 21) * 7,
        _ => 0,
    }
}

/// Decomposes a duration in days into weeks and 30-day months.
///
/// # Errors
///
/// Returns [`EngineError::OutOfRange`] when the duration is negative.
pub fn breakdown(duration_days: i64) -> EngineResult<DurationBreakdown> {
    if duration_days < 0 {
        return Err(EngineError::OutOfRange {
            field: "duration_days".to_string(),
            message: "must be a non-negative number".to_string(),
        });
    }

    Ok(DurationBreakdown {
        weeks: duration_days / 7,
        remaining_days: duration_days % 7,
        months: duration_days / 30,
        remaining_days_in_month: duration_days % 30,
    })
}
