//! Termination case model.
//!
//! This module defines [`TerminationCase`], the aggregate the protection
//! engine operates on: employment dates, sick days, years of service and the
//! absence facts, validated as a whole at construction time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Absence;
use crate::protection::{self, DeadlineResult};

/// The facts of one termination decision.
///
/// A `TerminationCase` is immutable once constructed; the absence facts may
/// be replaced as a group through [`TerminationCase::set_absence_details`],
/// which yields a new value rather than mutating in place. The three query
/// operations are pure reads over the validated facts.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use worksafe_engine::models::{Absence, AbsenceReason, TerminationCase};
///
/// let case = TerminationCase::new(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     10,
///     Absence::new(AbsenceReason::Illness, None, None).unwrap(),
///     3,
/// )
/// .unwrap();
///
/// let deadline = case.calculate_deadline().unwrap();
/// assert_eq!(deadline, NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationCase {
    start_date: NaiveDate,
    termination_date: NaiveDate,
    sick_days: i64,
    years_of_service: i64,
    absence: Absence,
}

impl TerminationCase {
    /// Creates a validated termination case.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] when the start date is after
    /// the termination date or an absence date is after the termination
    /// date, and [`EngineError::OutOfRange`] when `sick_days` or
    /// `years_of_service` is negative. Reason-level invariants (closed
    /// reason set, required start dates, end-before-start ordering) are
    /// enforced when the [`Absence`] is built.
    pub fn new(
        start_date: NaiveDate,
        termination_date: NaiveDate,
        sick_days: i64,
        absence: Absence,
        years_of_service: i64,
    ) -> EngineResult<Self> {
        if start_date > termination_date {
            return Err(EngineError::InvalidArgument {
                field: "start_date".to_string(),
                message: "cannot be after the termination date".to_string(),
            });
        }
        if sick_days < 0 {
            return Err(EngineError::OutOfRange {
                field: "sick_days".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if years_of_service < 0 {
            return Err(EngineError::OutOfRange {
                field: "years_of_service".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        validate_absence_against_termination(&absence, termination_date)?;

        Ok(Self {
            start_date,
            termination_date,
            sick_days,
            years_of_service,
            absence,
        })
    }

    /// Creates a case from raw parts, parsing the reason string.
    ///
    /// Mirrors the construction interface of the engine boundary: the reason
    /// is whitespace-trimmed and matched case-insensitively against the
    /// closed reason set before the case is validated.
    pub fn from_parts(
        start_date: NaiveDate,
        termination_date: NaiveDate,
        sick_days: i64,
        absence_reason: &str,
        reason_start_date: Option<NaiveDate>,
        years_of_service: i64,
        reason_end_date: Option<NaiveDate>,
    ) -> EngineResult<Self> {
        let absence = Absence::parse(absence_reason, reason_start_date, reason_end_date)?;
        Self::new(
            start_date,
            termination_date,
            sick_days,
            absence,
            years_of_service,
        )
    }

    /// Replaces the absence facts as a group, yielding a new case.
    ///
    /// All other fields are carried over unchanged. The replacement is
    /// validated exactly like construction; on failure the existing case is
    /// untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use worksafe_engine::models::{Absence, AbsenceReason, TerminationCase};
    ///
    /// let case = TerminationCase::new(
    ///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    ///     0,
    ///     Absence::new(AbsenceReason::Illness, None, None).unwrap(),
    ///     3,
    /// )
    /// .unwrap();
    ///
    /// let updated = case
    ///     .set_absence_details(
    ///         "unfall",
    ///         NaiveDate::from_ymd_opt(2022, 11, 1).unwrap(),
    ///         Some(NaiveDate::from_ymd_opt(2022, 12, 1).unwrap()),
    ///     )
    ///     .unwrap();
    /// assert_eq!(updated.absence().reason(), worksafe_engine::models::AbsenceReason::Accident);
    /// ```
    pub fn set_absence_details(
        &self,
        reason: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> EngineResult<Self> {
        let absence = Absence::parse(reason, Some(start_date), end_date)?;
        validate_absence_against_termination(&absence, self.termination_date)?;

        Ok(Self {
            absence,
            ..self.clone()
        })
    }

    /// The employment start date.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The date the notice is given.
    pub fn termination_date(&self) -> NaiveDate {
        self.termination_date
    }

    /// Calendar days of sick leave added to the termination date before the
    /// notice period is computed.
    pub fn sick_days(&self) -> i64 {
        self.sick_days
    }

    /// Whole completed years of service, as supplied by the caller.
    pub fn years_of_service(&self) -> i64 {
        self.years_of_service
    }

    /// The absence facts of this case.
    pub fn absence(&self) -> &Absence {
        &self.absence
    }

    /// Computes the legally valid termination deadline.
    ///
    /// See [`protection::calculate_deadline`] for the full pipeline; this
    /// method returns only the deadline date.
    pub fn calculate_deadline(&self) -> EngineResult<NaiveDate> {
        self.deadline_details().map(|result| result.deadline)
    }

    /// Computes the termination deadline with its intermediate values.
    pub fn deadline_details(&self) -> EngineResult<DeadlineResult> {
        protection::calculate_deadline(self)
    }

    /// Returns whether the notice period must be extended as of `notice_date`.
    pub fn must_be_extended(&self, notice_date: NaiveDate) -> EngineResult<bool> {
        protection::must_be_extended(self, notice_date)
    }

    /// Computes the extended notice date for `notice_date`.
    pub fn calculate_extension(&self, notice_date: NaiveDate) -> EngineResult<NaiveDate> {
        protection::calculate_extension(self, notice_date)
    }

    /// Returns whether the termination itself fell inside a retroactive
    /// protection window and is therefore void.
    pub fn is_invalid(&self) -> bool {
        protection::is_termination_invalid(self)
    }
}

fn validate_absence_against_termination(
    absence: &Absence,
    termination_date: NaiveDate,
) -> EngineResult<()> {
    if let Some(end) = absence.end_date() {
        if end > termination_date {
            return Err(EngineError::InvalidArgument {
                field: "reason_end_date".to_string(),
                message: "cannot be after the termination date".to_string(),
            });
        }
    }
    if let Some(start) = absence.start_date() {
        if start > termination_date {
            return Err(EngineError::InvalidArgument {
                field: "reason_start_date".to_string(),
                message: "cannot be after the termination date".to_string(),
            });
        }
    }
    Ok(())
}
