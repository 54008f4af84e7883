//! The termination protection engine.
//!
//! This module contains the reason-specific protection rules: statutory
//! notice period selection, the deadline pipeline, notice period extension
//! checks and the retroactive invalidity checks, together with the calendar
//! arithmetic they share.

mod date_math;
mod deadline;
mod extension;
mod invalidity;
mod notice_period;

pub use date_math::{add_days, add_months, days_in_month, is_leap_year, last_day_of_month};
pub use deadline::{calculate_deadline, DeadlineResult};
pub use extension::{
    calculate_extension, health_protection_days, military_protection_window, must_be_extended,
    AID_ACTION_BUFFER_DAYS, CARE_LEAVE_PROTECTION_MONTHS, HEALTH_PROTECTION_DAYS_LONG,
    HEALTH_PROTECTION_DAYS_MID, HEALTH_PROTECTION_DAYS_SHORT, MILITARY_BUFFER_DAYS,
    MILITARY_SERVICE_ASSUMED_DAYS, POSTPARTUM_PROTECTION_DAYS,
};
pub use invalidity::is_termination_invalid;
pub use notice_period::{employment_months, notice_period_months, EMPLOYMENT_MONTH_DAYS};
