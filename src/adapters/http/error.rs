//! Error envelope shared by all HTTP modules.
//!
//! Responses carry `{ "error": { "code", "message" } }`. Infrastructure
//! details are logged server-side and never surfaced to callers.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::member::MemberError;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

/// Wrapper that turns domain errors into HTTP responses.
pub struct ApiError(pub MemberError);

impl From<MemberError> for ApiError {
    fn from(err: MemberError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self.0 {
            MemberError::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            MemberError::NotFound(_) => (StatusCode::NOT_FOUND, "MEMBER_NOT_FOUND"),
            MemberError::PendingPeriodExists => (StatusCode::CONFLICT, "PENDING_PERIOD_EXISTS"),
            MemberError::NoPendingPeriod => (StatusCode::NOT_FOUND, "NO_PENDING_PERIOD"),
            MemberError::VersionConflict(_) => (StatusCode::CONFLICT, "CONCURRENT_MODIFICATION"),
            MemberError::Infrastructure(detail) => {
                tracing::error!(%detail, "request failed on infrastructure");
                let body = ErrorResponse::new("INTERNAL_ERROR", "Internal server error");
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
