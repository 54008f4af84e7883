//! Retroactive protection checks.
//!
//! A termination is void when the termination date itself falls inside a
//! reason-specific protection window. Unlike the extension rules, which are
//! queried with an arbitrary notice date, these checks run against the
//! stored termination date.

use crate::models::{Absence, TerminationCase};
use crate::protection::date_math::{add_days, add_months};
use crate::protection::extension::{
    health_protection_days, military_protection_window, AID_ACTION_BUFFER_DAYS,
    CARE_LEAVE_PROTECTION_MONTHS, POSTPARTUM_PROTECTION_DAYS,
};

/// Returns whether the termination fell inside a retroactive protection
/// window and is therefore void.
///
/// Reasons whose anchor dates are absent yield `false`: without the anchor
/// there is no window to test against.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use worksafe_engine::models::{Absence, AbsenceReason, TerminationCase};
/// use worksafe_engine::protection::is_termination_invalid;
///
/// let case = TerminationCase::new(
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2022, 12, 23).unwrap(),
///     0,
///     Absence::new(
///         AbsenceReason::MilitaryService,
///         Some(NaiveDate::from_ymd_opt(2022, 12, 12).unwrap()),
///         None,
///     )
///     .unwrap(),
///     2,
/// )
/// .unwrap();
///
/// assert!(is_termination_invalid(&case));
/// ```
pub fn is_termination_invalid(case: &TerminationCase) -> bool {
    let termination = case.termination_date();

    // A window bound past the representable calendar range covers every
    // termination date, hence the `unwrap_or(true)` on the checked adds.
    match case.absence() {
        Absence::MilitaryService { service_start, .. } => {
            military_protection_window(*service_start)
                .map(|(start, end)| termination >= start && termination <= end)
                .unwrap_or(true)
        }
        Absence::Illness { onset, recovery } | Absence::Accident { onset, recovery } => {
            match (onset, recovery) {
                (Some(_), Some(recovery)) => add_days(
                    *recovery,
                    health_protection_days(case.years_of_service()),
                    "computing the illness or accident protection end",
                )
                .map(|protection_end| termination <= protection_end)
                .unwrap_or(true),
                _ => false,
            }
        }
        Absence::Pregnancy { confinement, .. } => match confinement {
            Some(confinement) => add_days(
                *confinement,
                POSTPARTUM_PROTECTION_DAYS,
                "computing the postpartum protection end",
            )
            .map(|protection_end| termination <= protection_end)
            .unwrap_or(true),
            None => false,
        },
        Absence::CareLeave { leave_start, .. } => add_months(
            *leave_start,
            CARE_LEAVE_PROTECTION_MONTHS,
            "computing the care leave protection end",
        )
        .map(|protection_end| termination <= protection_end)
        .unwrap_or(true),
        Absence::AidAction { deployment_end, .. } => match deployment_end {
            Some(deployment_end) => add_days(
                *deployment_end,
                AID_ACTION_BUFFER_DAYS,
                "computing the aid action protection end",
            )
            .map(|protection_end| termination <= protection_end)
            .unwrap_or(true),
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbsenceReason;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn case(
        termination: &str,
        reason: AbsenceReason,
        reason_start: Option<&str>,
        reason_end: Option<&str>,
        years_of_service: i64,
    ) -> TerminationCase {
        let absence = Absence::new(reason, reason_start.map(date), reason_end.map(date)).unwrap();
        TerminationCase::new(
            date("2020-01-01"),
            date(termination),
            0,
            absence,
            years_of_service,
        )
        .unwrap()
    }

    #[test]
    fn test_termination_during_military_service_window_is_void() {
        let inside = case(
            "2022-12-23",
            AbsenceReason::MilitaryService,
            Some("2022-12-12"),
            None,
            2,
        );
        assert!(is_termination_invalid(&inside));
    }

    #[test]
    fn test_termination_outside_military_service_window_is_valid() {
        // Window around 2022-06-01: 2022-05-04 ..= 2022-07-10.
        let after = case(
            "2022-12-23",
            AbsenceReason::MilitaryService,
            Some("2022-06-01"),
            None,
            2,
        );
        assert!(!is_termination_invalid(&after));
    }

    #[test]
    fn test_illness_requires_both_episode_dates() {
        let missing_recovery = case(
            "2023-01-01",
            AbsenceReason::Illness,
            Some("2022-11-01"),
            None,
            2,
        );
        assert!(!is_termination_invalid(&missing_recovery));

        let missing_onset = case("2023-01-01", AbsenceReason::Illness, None, None, 2);
        assert!(!is_termination_invalid(&missing_onset));
    }

    #[test]
    fn test_illness_protection_extends_past_recovery_by_tier() {
        // Recovery 2022-11-01, 2 years of service: protection until +90d.
        let inside = case(
            "2023-01-01",
            AbsenceReason::Illness,
            Some("2022-10-01"),
            Some("2022-11-01"),
            2,
        );
        assert!(is_termination_invalid(&inside));
    }

    #[test]
    fn test_accident_uses_same_protection_as_illness() {
        let inside = case(
            "2023-01-01",
            AbsenceReason::Accident,
            Some("2022-10-01"),
            Some("2022-12-15"),
            1,
        );
        assert!(is_termination_invalid(&inside));
    }

    #[test]
    fn test_pregnancy_protection_covers_16_weeks_after_confinement() {
        let inside = case(
            "2023-01-15",
            AbsenceReason::Pregnancy,
            Some("2022-12-01"),
            None,
            3,
        );
        assert!(is_termination_invalid(&inside));

        let without_date = case("2023-01-15", AbsenceReason::Pregnancy, None, None, 3);
        assert!(!is_termination_invalid(&without_date));
    }

    #[test]
    fn test_pregnancy_protection_lapses_after_window() {
        // Confinement 2022-01-10: window ends 2022-05-02.
        let after = case(
            "2022-06-01",
            AbsenceReason::Pregnancy,
            Some("2022-01-10"),
            None,
            3,
        );
        assert!(!is_termination_invalid(&after));
    }

    #[test]
    fn test_care_leave_protection_covers_six_months() {
        let inside = case(
            "2023-02-01",
            AbsenceReason::CareLeave,
            Some("2022-09-15"),
            None,
            3,
        );
        assert!(is_termination_invalid(&inside));

        // Leave start 2022-01-10: window ends 2022-07-10.
        let after = case(
            "2022-08-01",
            AbsenceReason::CareLeave,
            Some("2022-01-10"),
            None,
            3,
        );
        assert!(!is_termination_invalid(&after));
    }

    #[test]
    fn test_aid_action_protection_requires_deployment_end() {
        let inside = case(
            "2022-12-20",
            AbsenceReason::AidAction,
            Some("2022-10-01"),
            Some("2022-12-01"),
            3,
        );
        assert!(is_termination_invalid(&inside));

        let without_end = case("2022-12-20", AbsenceReason::AidAction, None, None, 3);
        assert!(!is_termination_invalid(&without_end));
    }

    #[test]
    fn test_aid_action_protection_lapses_after_four_weeks() {
        // Deployment end 2022-01-10: window ends 2022-02-07.
        let after = case(
            "2022-03-01",
            AbsenceReason::AidAction,
            None,
            Some("2022-01-10"),
            3,
        );
        assert!(!is_termination_invalid(&after));
    }
}
