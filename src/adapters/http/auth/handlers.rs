//! HTTP handler for the login endpoint.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::auth::{LoginCommand, LoginError};

use super::super::error::ErrorResponse;
use super::super::state::AppState;
use super::dto::{LoginRequest, LoginResponse};

pub struct LoginApiError(pub LoginError);

impl From<LoginError> for LoginApiError {
    fn from(err: LoginError) -> Self {
        LoginApiError(err)
    }
}

impl IntoResponse for LoginApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorResponse::new("INVALID_CREDENTIALS", self.0.to_string());
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, axum::response::Response> {
    let Some(password) = request.password else {
        let body = ErrorResponse::new("PASSWORD_REQUIRED", "Password is required");
        return Err((StatusCode::BAD_REQUEST, Json(body)).into_response());
    };

    let handler = state.login_handler();
    let result = handler
        .handle(LoginCommand { password })
        .await
        .map_err(|err| LoginApiError(err).into_response())?;

    Ok(Json(LoginResponse {
        token: result.token,
        expires_in_minutes: result.expires_in_minutes,
    }))
}
