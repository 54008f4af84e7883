//! Response types for the termination protection engine API.
//!
//! This module defines the success bodies for the endpoints and the error
//! response structure with its mapping from [`EngineError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::articles::Article;
use crate::error::EngineError;
use crate::salary::DurationBreakdown;

/// Response body for the `/termination/evaluate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminationResponse {
    /// The legally valid termination deadline (always a month end).
    pub deadline: NaiveDate,
    /// Statutory notice period in calendar months.
    pub notice_months: u32,
    /// The notice date after sick days and any protection extension.
    pub adjusted_notice_date: NaiveDate,
    /// Whether a protection window pushed the notice date.
    pub was_extended: bool,
    /// Whether the termination itself is void.
    pub termination_invalid: bool,
    /// Extension check for the supplied notice date, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_be_extended: Option<bool>,
    /// The extended notice date, when the supplied notice date required one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_notice_date: Option<NaiveDate>,
}

/// Response body for the `/salary-continuation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryContinuationResponse {
    /// The salary continuation duration in days.
    pub continuation_days: i64,
    /// The duration decomposed into weeks and 30-day months.
    pub breakdown: DurationBreakdown,
}

/// Response body for the `/articles/search` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSearchResponse {
    /// The keywords extracted from the search text.
    pub keywords: Vec<String>,
    /// The matching articles.
    pub articles: Vec<Article>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidArgument { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_ARGUMENT", error.to_string()),
            },
            EngineError::OutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("ARGUMENT_OUT_OF_RANGE", error.to_string()),
            },
            EngineError::UnrecognizedReason { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNRECOGNIZED_REASON",
                    error.to_string(),
                    "Choose one of: militaryservice, illness, accident, pregnancy, careleave, aidaction",
                ),
            },
            EngineError::UnrecognizedScale { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNRECOGNIZED_SCALE",
                    error.to_string(),
                    "Choose one of: basel, bern, zurich",
                ),
            },
            EngineError::InvalidOperation { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("INVALID_OPERATION", error.to_string()),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::new("CONFIG_ERROR", error.to_string()),
                }
            }
        }
    }
}
