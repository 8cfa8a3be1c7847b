/// Unified error handling module
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures observed while talking to the upstream GraphQL API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("malformed upstream response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The caller always gets the same fixed body; whatever upstream
        // actually said stays in the logs.
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures observed by the REST fetch client talking to the proxy.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("launch API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("launch API returned status {0}")]
    Status(reqwest::StatusCode),
}
