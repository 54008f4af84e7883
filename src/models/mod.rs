//! Domain models for the termination protection engine.
//!
//! This module defines the absence facts (reason plus the dates its rules
//! need) and the [`TerminationCase`] aggregate the engine queries operate on.

mod absence;
mod termination_case;

pub use absence::{Absence, AbsenceReason};
pub use termination_case::TerminationCase;
