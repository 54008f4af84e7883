//! HTTP API for the termination protection engine.
//!
//! This module provides the axum router, request/response types and
//! application state for exposing the engine over HTTP.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ArticleSearchRequest, SalaryContinuationRequest, TerminationRequest};
pub use response::{
    ApiError, ApiErrorResponse, ArticleSearchResponse, SalaryContinuationResponse,
    TerminationResponse,
};
pub use state::AppState;
