//! Notice period extension rules.
//!
//! This module decides whether a notice date falls inside a reason-specific
//! protection window ([`must_be_extended`]) and computes the pushed-forward
//! notice date when it does ([`calculate_extension`]).

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{Absence, TerminationCase};
use crate::protection::date_math::{add_days, add_months};

/// Assumed length of a military service period in days.
///
/// Fixed simplification carried over from the modeled rules; real service
/// lengths vary.
pub const MILITARY_SERVICE_ASSUMED_DAYS: i64 = 11;

/// Buffer in days before and after a military service period.
pub const MILITARY_BUFFER_DAYS: i64 = 28;

/// Length of the postpartum protection window in days (16 weeks).
pub const POSTPARTUM_PROTECTION_DAYS: i64 = 16 * 7;

/// Length of the care leave protection window in calendar months.
pub const CARE_LEAVE_PROTECTION_MONTHS: u32 = 6;

/// Buffer in days after the end of an aid action deployment (4 weeks).
pub const AID_ACTION_BUFFER_DAYS: i64 = 7 * 4;

/// Illness/accident protection in days for under two years of service.
pub const HEALTH_PROTECTION_DAYS_SHORT: i64 = 30;

/// Illness/accident protection in days for two to five years of service.
pub const HEALTH_PROTECTION_DAYS_MID: i64 = 90;

/// Illness/accident protection in days from six years of service.
pub const HEALTH_PROTECTION_DAYS_LONG: i64 = 180;

/// Maps years of service to the illness/accident protection length in days.
pub fn health_protection_days(years_of_service: i64) -> i64 {
    match years_of_service {
        ..2 => HEALTH_PROTECTION_DAYS_SHORT,
        2..6 => HEALTH_PROTECTION_DAYS_MID,
        _ => HEALTH_PROTECTION_DAYS_LONG,
    }
}

/// Computes the inclusive military protection window around a service start.
///
/// The window spans from four weeks before the service start to four weeks
/// after the assumed service end.
pub fn military_protection_window(
    service_start: NaiveDate,
) -> EngineResult<(NaiveDate, NaiveDate)> {
    let context = "computing the military service protection window";
    let service_end = add_days(service_start, MILITARY_SERVICE_ASSUMED_DAYS, context)?;
    let window_start = add_days(service_start, -MILITARY_BUFFER_DAYS, context)?;
    let window_end = add_days(service_end, MILITARY_BUFFER_DAYS, context)?;
    Ok((window_start, window_end))
}

/// Returns whether the notice period must be extended as of `notice_date`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] when `notice_date` is before the
/// employment start date and [`EngineError::InvalidOperation`] when the
/// stored years of service are negative (defensive re-check).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use worksafe_engine::models::{Absence, AbsenceReason, TerminationCase};
/// use worksafe_engine::protection::must_be_extended;
///
/// let case = TerminationCase::new(
///     NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     0,
///     Absence::new(AbsenceReason::Illness, None, None).unwrap(),
///     6,
/// )
/// .unwrap();
///
/// // Six years of service: protection lapses 180 days after the notice.
/// let inside = NaiveDate::from_ymd_opt(2023, 11, 28).unwrap();
/// let outside = NaiveDate::from_ymd_opt(2023, 11, 29).unwrap();
/// assert!(must_be_extended(&case, inside).unwrap());
/// assert!(!must_be_extended(&case, outside).unwrap());
/// ```
pub fn must_be_extended(case: &TerminationCase, notice_date: NaiveDate) -> EngineResult<bool> {
    check_query_preconditions(case, notice_date)?;

    match case.absence() {
        Absence::MilitaryService { service_start, .. } => {
            let (window_start, window_end) = military_protection_window(*service_start)?;
            Ok(notice_date >= window_start && notice_date <= window_end)
        }
        Absence::Illness { .. } | Absence::Accident { .. } => {
            health_extension_applies(case, notice_date)
        }
        Absence::Pregnancy { confinement, .. } => match confinement {
            Some(confinement) => {
                let window_end = add_days(
                    *confinement,
                    POSTPARTUM_PROTECTION_DAYS,
                    "computing the postpartum protection window",
                )?;
                Ok(notice_date <= window_end)
            }
            None => Ok(false),
        },
        Absence::CareLeave { leave_start, .. } => {
            let window_end = add_months(
                *leave_start,
                CARE_LEAVE_PROTECTION_MONTHS,
                "computing the care leave protection window",
            )?;
            Ok(notice_date <= window_end)
        }
        Absence::AidAction { deployment_end, .. } => match deployment_end {
            Some(deployment_end) => {
                let window_end = add_days(
                    *deployment_end,
                    AID_ACTION_BUFFER_DAYS,
                    "computing the aid action protection window",
                )?;
                Ok(notice_date <= window_end)
            }
            None => Ok(false),
        },
    }
}

/// Computes the extended notice date for `notice_date`.
///
/// # Errors
///
/// Shares the preconditions of [`must_be_extended`]; additionally fails with
/// [`EngineError::InvalidOperation`] when the stored absence end date lies
/// after the termination date, or when a military service or care leave
/// extension would land after the termination date.
pub fn calculate_extension(
    case: &TerminationCase,
    notice_date: NaiveDate,
) -> EngineResult<NaiveDate> {
    check_query_preconditions(case, notice_date)?;

    if let Some(end) = case.absence().end_date() {
        if end > case.termination_date() {
            return Err(EngineError::InvalidOperation {
                message: "the absence end date cannot be after the termination date".to_string(),
            });
        }
    }

    match case.absence() {
        Absence::Illness { .. } | Absence::Accident { .. } => add_days(
            notice_date,
            health_protection_days(case.years_of_service()),
            "extending the notice date for illness or accident",
        ),
        Absence::Pregnancy { .. } => add_days(
            notice_date,
            POSTPARTUM_PROTECTION_DAYS,
            "extending the notice date for pregnancy",
        ),
        Absence::MilitaryService { service_start, .. } => {
            let context = "extending the notice date for military service";
            let service_end = add_days(*service_start, MILITARY_SERVICE_ASSUMED_DAYS, context)?;
            let extended = add_days(service_end, MILITARY_BUFFER_DAYS, context)?;
            ensure_within_termination(extended, case.termination_date())?;
            Ok(extended)
        }
        Absence::CareLeave { leave_start, .. } => {
            let extended = add_months(
                *leave_start,
                CARE_LEAVE_PROTECTION_MONTHS,
                "extending the notice date for care leave",
            )?;
            ensure_within_termination(extended, case.termination_date())?;
            Ok(extended)
        }
        Absence::AidAction { .. } => add_days(
            notice_date,
            AID_ACTION_BUFFER_DAYS,
            "extending the notice date for an aid action",
        ),
    }
}

fn check_query_preconditions(case: &TerminationCase, notice_date: NaiveDate) -> EngineResult<()> {
    if notice_date < case.start_date() {
        return Err(EngineError::InvalidArgument {
            field: "notice_date".to_string(),
            message: "cannot be before the employment start date".to_string(),
        });
    }
    if case.years_of_service() < 0 {
        return Err(EngineError::InvalidOperation {
            message: "years of service cannot be negative".to_string(),
        });
    }
    Ok(())
}

fn ensure_within_termination(extended: NaiveDate, termination_date: NaiveDate) -> EngineResult<()> {
    if extended > termination_date {
        return Err(EngineError::InvalidOperation {
            message: "the extended notice date cannot be after the termination date".to_string(),
        });
    }
    Ok(())
}

/// Checks the three illness/accident thresholds.
///
/// The thresholds are evaluated as independent conditions rather than a
/// single tier selected by years of service; any one satisfied triggers the
/// extension.
fn health_extension_applies(case: &TerminationCase, notice_date: NaiveDate) -> EngineResult<bool> {
    let years = case.years_of_service();
    let termination = case.termination_date();
    let context = "computing the illness or accident protection window";

    if years < 2 && notice_date <= add_days(termination, HEALTH_PROTECTION_DAYS_SHORT, context)? {
        return Ok(true);
    }
    if years < 6 && notice_date <= add_days(termination, HEALTH_PROTECTION_DAYS_MID, context)? {
        return Ok(true);
    }
    if years >= 6 && notice_date <= add_days(termination, HEALTH_PROTECTION_DAYS_LONG, context)? {
        return Ok(true);
    }
    Ok(false)
}
