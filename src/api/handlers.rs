//! HTTP request handlers for the termination protection engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::TerminationCase;
use crate::salary::{self, Scale};

use super::request::{ArticleSearchRequest, SalaryContinuationRequest, TerminationRequest};
use super::response::{
    ApiError, ApiErrorResponse, ArticleSearchResponse, SalaryContinuationResponse,
    TerminationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/termination/evaluate", post(evaluate_termination_handler))
        .route("/salary-continuation", post(salary_continuation_handler))
        .route("/articles/search", post(article_search_handler))
        .with_state(state)
}

/// Handler for the POST /termination/evaluate endpoint.
///
/// Constructs a termination case from the request facts and answers the
/// three engine queries: the deadline, the retroactive invalidity check and
/// (when a notice date was supplied) the extension check.
async fn evaluate_termination_handler(
    payload: Result<Json<TerminationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Evaluating termination case");

    let request = match unpack_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let case = match TerminationCase::from_parts(
        request.start_date,
        request.termination_date,
        request.sick_days,
        &request.absence_reason,
        request.reason_start_date,
        request.years_of_service,
        request.reason_end_date,
    ) {
        Ok(case) => case,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Rejected termination case");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let details = match case.deadline_details() {
        Ok(details) => details,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Deadline calculation failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let mut must_be_extended = None;
    let mut extended_notice_date = None;
    if let Some(notice_date) = request.notice_date {
        match case.must_be_extended(notice_date) {
            Ok(extend) => {
                must_be_extended = Some(extend);
                if extend {
                    match case.calculate_extension(notice_date) {
                        Ok(extended) => extended_notice_date = Some(extended),
                        Err(err) => {
                            warn!(
                                correlation_id = %correlation_id,
                                error = %err,
                                "Extension calculation failed"
                            );
                            return ApiErrorResponse::from(err).into_response();
                        }
                    }
                }
            }
            Err(err) => {
                warn!(correlation_id = %correlation_id, error = %err, "Extension check failed");
                return ApiErrorResponse::from(err).into_response();
            }
        }
    }

    let response = TerminationResponse {
        deadline: details.deadline,
        notice_months: details.notice_months,
        adjusted_notice_date: details.adjusted_notice_date,
        was_extended: details.was_extended,
        termination_invalid: case.is_invalid(),
        must_be_extended,
        extended_notice_date,
    };

    info!(
        correlation_id = %correlation_id,
        deadline = %response.deadline,
        invalid = response.termination_invalid,
        "Termination case evaluated"
    );
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for the POST /salary-continuation endpoint.
async fn salary_continuation_handler(
    payload: Result<Json<SalaryContinuationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Calculating salary continuation");

    let request = match unpack_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let result = request
        .scale
        .parse::<Scale>()
        .and_then(|scale| salary::continuation_days(request.start_date, request.event_date, scale))
        .and_then(|days| Ok((days, salary::breakdown(days)?)));

    match result {
        Ok((continuation_days, breakdown)) => (
            StatusCode::OK,
            Json(SalaryContinuationResponse {
                continuation_days,
                breakdown,
            }),
        )
            .into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Salary continuation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the POST /articles/search endpoint.
async fn article_search_handler(
    State(state): State<AppState>,
    payload: Result<Json<ArticleSearchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match unpack_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let keywords = crate::articles::ArticleIndex::extract_keywords(&request.text);
    let articles = state
        .articles()
        .find(&keywords)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    info!(
        correlation_id = %correlation_id,
        keywords = keywords.len(),
        matches = articles.len(),
        "Article search completed"
    );
    (
        StatusCode::OK,
        Json(ArticleSearchResponse { keywords, articles }),
    )
        .into_response()
}

/// Unpacks a JSON payload, mapping axum rejections to structured errors.
fn unpack_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}
