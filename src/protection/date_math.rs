//! Calendar arithmetic helpers for the protection rules.
//!
//! All month additions use true calendar months with month-end clamping
//! (adding one month to 31 January yields the last day of February). Day
//! and month additions that leave the representable calendar range fail
//! with [`EngineError::InvalidOperation`].

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};

/// Adds (or, for negative `days`, subtracts) calendar days.
pub fn add_days(date: NaiveDate, days: i64, context: &str) -> EngineResult<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| EngineError::date_out_of_range(context))
}

/// Adds calendar months, clamping to the last valid day of the target month.
pub fn add_months(date: NaiveDate, months: u32, context: &str) -> EngineResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| EngineError::date_out_of_range(context))
}

/// Returns the last calendar day of the month `date` falls in.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    // The computed day count is always a valid day of this month.
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Returns the number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
