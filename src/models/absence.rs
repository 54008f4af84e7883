//! Absence model and related types.
//!
//! This module defines the closed set of absence reasons recognized by the
//! engine and the [`Absence`] value that pairs a reason with the dates its
//! protection rules need. Reasons whose rules require a start date
//! (military service, care leave) carry it as a non-optional field, so a
//! "missing required date" is unconstructible rather than a runtime state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// The closed set of absence reasons with protection rules.
///
/// Input strings are whitespace-trimmed and matched case-insensitively.
/// Both the English vocabulary (`militaryservice`, `illness`, `accident`,
/// `pregnancy`, `careleave`, `aidaction`) and the German vocabulary of the
/// underlying statute (`militärdienst`, `krankheit`, `unfall`,
/// `schwangerschaft`, `betreuungsurlaub`, `hilfsaktion`) are accepted.
///
/// # Example
///
/// ```
/// use worksafe_engine::models::AbsenceReason;
///
/// let reason: AbsenceReason = "  Militärdienst ".parse().unwrap();
/// assert_eq!(reason, AbsenceReason::MilitaryService);
/// assert!("sabbatical".parse::<AbsenceReason>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceReason {
    /// Compulsory military, civil defence or civilian service.
    MilitaryService,
    /// Incapacity to work through no fault of the employee: illness.
    Illness,
    /// Incapacity to work through no fault of the employee: accident.
    Accident,
    /// Pregnancy and the weeks following confinement.
    Pregnancy,
    /// Leave to care for a family member with a serious health impairment.
    CareLeave,
    /// Participation in a foreign aid action ordered by a federal authority.
    AidAction,
}

impl FromStr for AbsenceReason {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EngineError::InvalidArgument {
                field: "absence_reason".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        match normalized.as_str() {
            "militaryservice" | "military_service" | "militärdienst" => {
                Ok(AbsenceReason::MilitaryService)
            }
            "illness" | "krankheit" => Ok(AbsenceReason::Illness),
            "accident" | "unfall" => Ok(AbsenceReason::Accident),
            "pregnancy" | "schwangerschaft" => Ok(AbsenceReason::Pregnancy),
            "careleave" | "care_leave" | "betreuungsurlaub" => Ok(AbsenceReason::CareLeave),
            "aidaction" | "aid_action" | "hilfsaktion" => Ok(AbsenceReason::AidAction),
            _ => Err(EngineError::UnrecognizedReason {
                reason: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for AbsenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            AbsenceReason::MilitaryService => "militaryservice",
            AbsenceReason::Illness => "illness",
            AbsenceReason::Accident => "accident",
            AbsenceReason::Pregnancy => "pregnancy",
            AbsenceReason::CareLeave => "careleave",
            AbsenceReason::AidAction => "aidaction",
        };
        write!(f, "{token}")
    }
}

/// The absence facts of one termination case.
///
/// One variant per recognized reason; each variant carries the dates its
/// protection rules read. Construct through [`Absence::new`] or
/// [`Absence::parse`], which enforce the required-date and date-ordering
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Absence {
    /// Military service; the service start date is required.
    MilitaryService {
        /// First day of the service period.
        service_start: NaiveDate,
        /// Last day of the service period, when known.
        #[serde(default)]
        service_end: Option<NaiveDate>,
    },
    /// Illness; episode dates are optional.
    Illness {
        /// First day of the incapacity, when known.
        #[serde(default)]
        onset: Option<NaiveDate>,
        /// Last day of the incapacity, when known.
        #[serde(default)]
        recovery: Option<NaiveDate>,
    },
    /// Accident; episode dates are optional.
    Accident {
        /// First day of the incapacity, when known.
        #[serde(default)]
        onset: Option<NaiveDate>,
        /// Last day of the incapacity, when known.
        #[serde(default)]
        recovery: Option<NaiveDate>,
    },
    /// Pregnancy; the confinement date anchors the postpartum window.
    Pregnancy {
        /// Date of confinement, when known.
        #[serde(default)]
        confinement: Option<NaiveDate>,
        /// End of the maternity absence, when known.
        #[serde(default)]
        leave_end: Option<NaiveDate>,
    },
    /// Care leave; the leave start date is required.
    CareLeave {
        /// First day of the care leave.
        leave_start: NaiveDate,
        /// Last day of the care leave, when known.
        #[serde(default)]
        leave_end: Option<NaiveDate>,
    },
    /// Aid action; protection is anchored on the deployment end date.
    AidAction {
        /// First day of the deployment, when known.
        #[serde(default)]
        deployment_start: Option<NaiveDate>,
        /// Last day of the deployment, when known.
        #[serde(default)]
        deployment_end: Option<NaiveDate>,
    },
}

impl Absence {
    /// Builds the absence facts for a reason from optional start/end dates.
    ///
    /// Fails when a reason that requires a start date (military service,
    /// care leave) is given none, or when the end date precedes the start
    /// date. Ordering against the termination date is validated by
    /// [`TerminationCase`](crate::models::TerminationCase), which owns that
    /// date.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use worksafe_engine::models::{Absence, AbsenceReason};
    ///
    /// let absence = Absence::new(
    ///     AbsenceReason::MilitaryService,
    ///     Some(NaiveDate::from_ymd_opt(2023, 3, 6).unwrap()),
    ///     None,
    /// )
    /// .unwrap();
    /// assert_eq!(absence.reason(), AbsenceReason::MilitaryService);
    ///
    /// // Military service without a start date is not constructible.
    /// assert!(Absence::new(AbsenceReason::MilitaryService, None, None).is_err());
    /// ```
    pub fn new(
        reason: AbsenceReason,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> EngineResult<Self> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(EngineError::InvalidArgument {
                    field: "reason_end_date".to_string(),
                    message: "cannot be earlier than the reason start date".to_string(),
                });
            }
        }

        match reason {
            AbsenceReason::MilitaryService => {
                let service_start = start_date.ok_or_else(|| required_start_date(reason))?;
                Ok(Absence::MilitaryService {
                    service_start,
                    service_end: end_date,
                })
            }
            AbsenceReason::Illness => Ok(Absence::Illness {
                onset: start_date,
                recovery: end_date,
            }),
            AbsenceReason::Accident => Ok(Absence::Accident {
                onset: start_date,
                recovery: end_date,
            }),
            AbsenceReason::Pregnancy => Ok(Absence::Pregnancy {
                confinement: start_date,
                leave_end: end_date,
            }),
            AbsenceReason::CareLeave => {
                let leave_start = start_date.ok_or_else(|| required_start_date(reason))?;
                Ok(Absence::CareLeave {
                    leave_start,
                    leave_end: end_date,
                })
            }
            AbsenceReason::AidAction => Ok(Absence::AidAction {
                deployment_start: start_date,
                deployment_end: end_date,
            }),
        }
    }

    /// Parses the reason string and builds the absence facts.
    ///
    /// Equivalent to `reason.parse()` followed by [`Absence::new`].
    pub fn parse(
        reason: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> EngineResult<Self> {
        Self::new(reason.parse()?, start_date, end_date)
    }

    /// Returns the reason of this absence.
    pub fn reason(&self) -> AbsenceReason {
        match self {
            Absence::MilitaryService { .. } => AbsenceReason::MilitaryService,
            Absence::Illness { .. } => AbsenceReason::Illness,
            Absence::Accident { .. } => AbsenceReason::Accident,
            Absence::Pregnancy { .. } => AbsenceReason::Pregnancy,
            Absence::CareLeave { .. } => AbsenceReason::CareLeave,
            Absence::AidAction { .. } => AbsenceReason::AidAction,
        }
    }

    /// Returns the stored absence start date, if any.
    pub fn start_date(&self) -> Option<NaiveDate> {
        match self {
            Absence::MilitaryService { service_start, .. } => Some(*service_start),
            Absence::Illness { onset, .. } | Absence::Accident { onset, .. } => *onset,
            Absence::Pregnancy { confinement, .. } => *confinement,
            Absence::CareLeave { leave_start, .. } => Some(*leave_start),
            Absence::AidAction {
                deployment_start, ..
            } => *deployment_start,
        }
    }

    /// Returns the stored absence end date, if any.
    pub fn end_date(&self) -> Option<NaiveDate> {
        match self {
            Absence::MilitaryService { service_end, .. } => *service_end,
            Absence::Illness { recovery, .. } | Absence::Accident { recovery, .. } => *recovery,
            Absence::Pregnancy { leave_end, .. } | Absence::CareLeave { leave_end, .. } => {
                *leave_end
            }
            Absence::AidAction { deployment_end, .. } => *deployment_end,
        }
    }
}

fn required_start_date(reason: AbsenceReason) -> EngineError {
    EngineError::InvalidArgument {
        field: "reason_start_date".to_string(),
        message: format!("a reason start date is required for the absence reason '{reason}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_english_vocabulary() {
        assert_eq!(
            "militaryservice".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::MilitaryService
        );
        assert_eq!(
            "illness".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::Illness
        );
        assert_eq!(
            "accident".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::Accident
        );
        assert_eq!(
            "pregnancy".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::Pregnancy
        );
        assert_eq!(
            "careleave".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::CareLeave
        );
        assert_eq!(
            "aidaction".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::AidAction
        );
    }

    #[test]
    fn test_parse_german_vocabulary() {
        assert_eq!(
            "militärdienst".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::MilitaryService
        );
        assert_eq!(
            "krankheit".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::Illness
        );
        assert_eq!(
            "unfall".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::Accident
        );
        assert_eq!(
            "schwangerschaft".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::Pregnancy
        );
        assert_eq!(
            "betreuungsurlaub".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::CareLeave
        );
        assert_eq!(
            "hilfsaktion".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::AidAction
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            "  KRANKHEIT  ".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::Illness
        );
        assert_eq!(
            "MilitaryService".parse::<AbsenceReason>().unwrap(),
            AbsenceReason::MilitaryService
        );
    }

    #[test]
    fn test_parse_empty_reason_fails_as_invalid_argument() {
        let err = "   ".parse::<AbsenceReason>().unwrap_err();
        assert!(matches!(err, EngineError::InvalidArgument { field, .. } if field == "absence_reason"));
    }

    #[test]
    fn test_parse_unknown_reason_fails() {
        let err = "sabbatical".parse::<AbsenceReason>().unwrap_err();
        assert!(matches!(err, EngineError::UnrecognizedReason { reason } if reason == "sabbatical"));
    }

    #[test]
    fn test_military_service_requires_start_date() {
        let err = Absence::new(AbsenceReason::MilitaryService, None, None).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidArgument { field, .. } if field == "reason_start_date"
        ));
    }

    #[test]
    fn test_care_leave_requires_start_date() {
        let err = Absence::new(AbsenceReason::CareLeave, None, None).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidArgument { field, .. } if field == "reason_start_date"
        ));
    }

    #[test]
    fn test_illness_dates_are_optional() {
        let absence = Absence::new(AbsenceReason::Illness, None, None).unwrap();
        assert_eq!(absence.start_date(), None);
        assert_eq!(absence.end_date(), None);
    }

    #[test]
    fn test_end_date_before_start_date_fails() {
        let err = Absence::new(
            AbsenceReason::Illness,
            Some(date("2023-02-10")),
            Some(date("2023-02-01")),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidArgument { field, .. } if field == "reason_end_date"
        ));
    }

    #[test]
    fn test_accessors_return_stored_dates() {
        let absence = Absence::new(
            AbsenceReason::AidAction,
            Some(date("2023-01-10")),
            Some(date("2023-02-20")),
        )
        .unwrap();
        assert_eq!(absence.reason(), AbsenceReason::AidAction);
        assert_eq!(absence.start_date(), Some(date("2023-01-10")));
        assert_eq!(absence.end_date(), Some(date("2023-02-20")));
    }

    #[test]
    fn test_parse_builds_variant_from_string() {
        let absence = Absence::parse("Betreuungsurlaub", Some(date("2023-05-01")), None).unwrap();
        assert_eq!(absence.reason(), AbsenceReason::CareLeave);
        assert_eq!(absence.start_date(), Some(date("2023-05-01")));
    }

    #[test]
    fn test_absence_serialization_round_trip() {
        let absence = Absence::new(
            AbsenceReason::MilitaryService,
            Some(date("2023-03-06")),
            None,
        )
        .unwrap();
        let json = serde_json::to_string(&absence).unwrap();
        assert!(json.contains("\"reason\":\"military_service\""));
        let deserialized: Absence = serde_json::from_str(&json).unwrap();
        assert_eq!(absence, deserialized);
    }

    #[test]
    fn test_reason_display_uses_english_tokens() {
        assert_eq!(AbsenceReason::MilitaryService.to_string(), "militaryservice");
        assert_eq!(AbsenceReason::CareLeave.to_string(), "careleave");
    }
}
