//! Request types for the termination protection engine API.
//!
//! This module defines the JSON request structures for the HTTP endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for the `/termination/evaluate` endpoint.
///
/// Carries the facts of one termination case. The absence reason is a free
/// string matched case-insensitively against the closed reason set (English
/// or German vocabulary).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminationRequest {
    /// The employment start date.
    pub start_date: NaiveDate,
    /// The date the notice is given.
    pub termination_date: NaiveDate,
    /// Calendar days of sick leave added to the termination date.
    #[serde(default)]
    pub sick_days: i64,
    /// The absence reason (e.g. "illness", "militärdienst").
    pub absence_reason: String,
    /// The start date of the absence, when known.
    #[serde(default)]
    pub reason_start_date: Option<NaiveDate>,
    /// The end date of the absence, when known.
    #[serde(default)]
    pub reason_end_date: Option<NaiveDate>,
    /// Whole completed years of service.
    #[serde(default = "default_years_of_service")]
    pub years_of_service: i64,
    /// Optional notice date for the extension check.
    #[serde(default)]
    pub notice_date: Option<NaiveDate>,
}

fn default_years_of_service() -> i64 {
    1
}

/// Request body for the `/salary-continuation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryContinuationRequest {
    /// The employment start date.
    pub start_date: NaiveDate,
    /// The date of the event triggering salary continuation.
    pub event_date: NaiveDate,
    /// The cantonal scale ("basel", "bern" or "zurich").
    pub scale: String,
}

/// Request body for the `/articles/search` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSearchRequest {
    /// Free text to extract search keywords from.
    pub text: String,
}
