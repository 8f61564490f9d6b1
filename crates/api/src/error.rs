//! Error-to-response mapping for the task API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;
use tracker::TrackerError;

/// Error returned by API handlers.
///
/// Wraps [`TrackerError`] so handlers can propagate storage failures with
/// `?`. The response body is always `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(TrackerError);

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            TrackerError::TaskNotFound { .. } => StatusCode::NOT_FOUND,
            // Remote bin failures are upstream errors, not ours
            TrackerError::Http(_) | TrackerError::BinApi { .. } => StatusCode::BAD_GATEWAY,
            TrackerError::IdExhausted
            | TrackerError::FileRead { .. }
            | TrackerError::FileWrite { .. }
            | TrackerError::Serialization(_)
            | TrackerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, status = status.as_u16(), "Request failed");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
