//! Statutory notice period selection.
//!
//! The length of the notice period is keyed to completed months of service.
//! The month count deliberately approximates months as 30-day blocks; only
//! the later deadline arithmetic uses true calendar months.

use chrono::NaiveDate;

/// Day length of the month blocks used for the employment duration estimate.
pub const EMPLOYMENT_MONTH_DAYS: i64 = 30;

/// Estimates whole months of employment between two dates.
///
/// Uses fixed 30-day months; the estimate only selects the notice period
/// tier and is never fed back into calendar arithmetic.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use worksafe_engine::protection::employment_months;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let termination = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// assert_eq!(employment_months(start, termination), 36);
/// ```
pub fn employment_months(start_date: NaiveDate, termination_date: NaiveDate) -> i64 {
    (termination_date - start_date).num_days() / EMPLOYMENT_MONTH_DAYS
}

/// Maps months of employment to the statutory notice period in months.
///
/// Under one year of service: one month. One to ten years: two months.
/// Over ten years: three months.
pub fn notice_period_months(employment_months: i64) -> u32 {
    match employment_months {
        ..12 => 1,
        12..=120 => 2,
        _ => 3,
    }
}
