use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Unified error type for API responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Upstream provider failure; the client gets a generic message while
    /// the cause is logged server-side.
    Agent,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(msg) => write!(f, "bad_request: {msg}"),
            Self::Agent => write!(f, "agent_error"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Agent => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process your request".to_string(),
            ),
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
