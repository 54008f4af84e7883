//! Termination deadline calculation.
//!
//! The deadline pipeline: estimate the employment duration, select the
//! statutory notice period, push the notice date past any protection window
//! the sick-day-adjusted termination date falls into, add the notice period
//! in true calendar months and snap to the end of that month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::TerminationCase;
use crate::protection::date_math::{add_days, add_months, last_day_of_month};
use crate::protection::extension::{calculate_extension, must_be_extended};
use crate::protection::notice_period::{employment_months, notice_period_months};

/// The result of a deadline calculation, with its intermediate values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    /// The legally valid termination deadline (always a month end).
    pub deadline: NaiveDate,
    /// Estimated whole months of employment (30-day blocks).
    pub employment_months: i64,
    /// Statutory notice period in calendar months.
    pub notice_months: u32,
    /// The notice date after sick days and any protection extension.
    pub adjusted_notice_date: NaiveDate,
    /// Whether a protection window pushed the notice date.
    pub was_extended: bool,
}

/// Computes the legally valid termination deadline for a case.
///
/// # Errors
///
/// Returns [`EngineError::InvalidOperation`] when the stored facts are
/// inconsistent (defensive re-check of the construction invariants) or when
/// a date addition leaves the representable calendar range, and propagates
/// failures of the extension rules.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use worksafe_engine::models::{Absence, AbsenceReason, TerminationCase};
/// use worksafe_engine::protection::calculate_deadline;
///
/// let case = TerminationCase::new(
///     NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 14).unwrap(),
///     5,
///     Absence::new(AbsenceReason::Illness, None, None).unwrap(),
///     2,
/// )
/// .unwrap();
///
/// let result = calculate_deadline(&case).unwrap();
/// assert_eq!(result.deadline, NaiveDate::from_ymd_opt(2023, 11, 30).unwrap());
/// assert_eq!(result.notice_months, 2);
/// assert!(result.was_extended);
/// ```
pub fn calculate_deadline(case: &TerminationCase) -> EngineResult<DeadlineResult> {
    if case.termination_date() < case.start_date() {
        return Err(EngineError::InvalidOperation {
            message: "the termination date must be after the start date".to_string(),
        });
    }
    if case.sick_days() < 0 {
        return Err(EngineError::InvalidOperation {
            message: "sick days cannot be negative".to_string(),
        });
    }

    let employment_months = employment_months(case.start_date(), case.termination_date());
    let notice_months = notice_period_months(employment_months);

    let mut adjusted_notice_date = add_days(
        case.termination_date(),
        case.sick_days(),
        "adding sick days to the termination date",
    )?;

    let was_extended = must_be_extended(case, adjusted_notice_date)?;
    if was_extended {
        adjusted_notice_date = calculate_extension(case, adjusted_notice_date)?;
    }

    let end_of_notice_period = add_months(
        adjusted_notice_date,
        notice_months,
        "adding the notice period to the notice date",
    )?;

    Ok(DeadlineResult {
        deadline: last_day_of_month(end_of_notice_period),
        employment_months,
        notice_months,
        adjusted_notice_date,
        was_extended,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Absence, AbsenceReason};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn illness_case(
        start: &str,
        termination: &str,
        sick_days: i64,
        years_of_service: i64,
    ) -> TerminationCase {
        TerminationCase::new(
            date(start),
            date(termination),
            sick_days,
            Absence::new(AbsenceReason::Illness, None, None).unwrap(),
            years_of_service,
        )
        .unwrap()
    }

    #[test]
    fn test_standard_illness_short_tenure() {
        let case = illness_case("2020-01-01", "2023-01-01", 10, 3);
        let result = calculate_deadline(&case).unwrap();

        assert_eq!(result.employment_months, 36);
        assert_eq!(result.notice_months, 2);
        assert!(result.was_extended);
        // 2023-01-11 pushed by 90 days to 2023-04-11, plus two months.
        assert_eq!(result.adjusted_notice_date, date("2023-04-11"));
        assert_eq!(result.deadline, date("2023-06-30"));
    }

    #[test]
    fn test_illness_with_shorter_window() {
        let case = illness_case("2021-06-15", "2023-06-14", 5, 2);
        let result = calculate_deadline(&case).unwrap();

        assert_eq!(result.notice_months, 2);
        assert_eq!(result.deadline, date("2023-11-30"));
    }

    #[test]
    fn test_deadline_is_always_a_month_end() {
        let case = illness_case("2010-03-20", "2023-02-10", 0, 12);
        let result = calculate_deadline(&case).unwrap();
        assert_eq!(result.deadline, last_day_of_month(result.deadline));
    }

    #[test]
    fn test_under_one_year_gets_one_month_notice() {
        let case = illness_case("2022-10-01", "2023-01-01", 0, 0);
        let result = calculate_deadline(&case).unwrap();

        assert_eq!(result.notice_months, 1);
        assert!(result.was_extended);
        // 2023-01-01 + 30d = 2023-01-31, + 1 month = 2023-02-28.
        assert_eq!(result.adjusted_notice_date, date("2023-01-31"));
        assert_eq!(result.deadline, date("2023-02-28"));
    }

    #[test]
    fn test_over_ten_years_gets_three_months_notice() {
        let case = illness_case("2010-01-01", "2023-01-01", 0, 13);
        let result = calculate_deadline(&case).unwrap();

        assert_eq!(result.notice_months, 3);
        // 2023-01-01 + 180d = 2023-06-30, + 3 months = 2023-09-30.
        assert_eq!(result.deadline, date("2023-09-30"));
    }

    #[test]
    fn test_no_extension_when_window_lapsed() {
        // Aid action without a deployment end date never extends.
        let absence = Absence::new(AbsenceReason::AidAction, None, None).unwrap();
        let case = TerminationCase::new(
            date("2020-01-01"),
            date("2023-01-15"),
            0,
            absence,
            3,
        )
        .unwrap();
        let result = calculate_deadline(&case).unwrap();

        assert!(!result.was_extended);
        assert_eq!(result.adjusted_notice_date, date("2023-01-15"));
        assert_eq!(result.deadline, date("2023-03-31"));
    }

    #[test]
    fn test_leap_year_february_deadline() {
        // Adjusted notice date lands in December 2023; two months later is
        // February 2024, a leap February.
        let absence = Absence::new(AbsenceReason::AidAction, None, None).unwrap();
        let case = TerminationCase::new(
            date("2021-01-01"),
            date("2023-12-05"),
            0,
            absence,
            2,
        )
        .unwrap();
        let result = calculate_deadline(&case).unwrap();
        assert_eq!(result.deadline, date("2024-02-29"));
    }

    #[test]
    fn test_sick_days_monotonicity_spot_check() {
        let base = calculate_deadline(&illness_case("2020-01-01", "2023-01-01", 0, 3)).unwrap();
        let more = calculate_deadline(&illness_case("2020-01-01", "2023-01-01", 45, 3)).unwrap();
        assert!(more.deadline >= base.deadline);
    }

    #[test]
    fn test_sick_days_overflowing_calendar_fails() {
        let case = illness_case("2020-01-01", "2023-01-01", i64::MAX / 2, 3);
        let err = calculate_deadline(&case).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOperation { .. }));
    }

    #[test]
    fn test_military_extension_past_termination_propagates() {
        // The protection window covers the termination date, but the pushed
        // notice date would land after it.
        let absence = Absence::new(
            AbsenceReason::MilitaryService,
            Some(date("2022-12-20")),
            None,
        )
        .unwrap();
        let case = TerminationCase::new(
            date("2020-01-01"),
            date("2022-12-23"),
            0,
            absence,
            2,
        )
        .unwrap();
        let err = calculate_deadline(&case).unwrap_err();
        assert!(matches!(err, EngineError::InvalidOperation { .. }));
    }
}
