use crate::utils::error::MSG_FILE_NOT_FOUND;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Error body returned to API callers. Upstream detail is logged by the
/// handler and never copied in here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, MSG_FILE_NOT_FOUND),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
