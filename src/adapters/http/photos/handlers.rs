//! HTTP handler for the photo upload endpoint.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::photos::{UploadPhotoCommand, UploadPhotoError};

use super::super::error::ErrorResponse;
use super::super::state::AppState;
use super::dto::UploadPhotoResponse;

pub struct UploadApiError(pub UploadPhotoError);

impl IntoResponse for UploadApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code) = match &self.0 {
            UploadPhotoError::UnsupportedMediaType => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_MEDIA_TYPE")
            }
            UploadPhotoError::MissingFile => (StatusCode::BAD_REQUEST, "NO_FILE_PROVIDED"),
            UploadPhotoError::MalformedRequest(_) => {
                (StatusCode::BAD_REQUEST, "MALFORMED_REQUEST")
            }
            UploadPhotoError::Store(err) => {
                tracing::error!(error = %err, "photo upload failed");
                let body = ErrorResponse::new("UPLOAD_FAILED", "Upload failed");
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };
        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

/// POST /api/upload-photo
///
/// Expects a multipart form with a single `file` part.
pub async fn upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, UploadApiError> {
    let mut file: Option<(Vec<u8>, String, String)> = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        UploadApiError(UploadPhotoError::MalformedRequest(format!(
            "unreadable multipart body: {e}"
        )))
    })? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("photo").to_string();
            let mime_type = field.content_type().unwrap_or("").to_string();
            let bytes = field.bytes().await.map_err(|e| {
                UploadApiError(UploadPhotoError::MalformedRequest(format!(
                    "unreadable file part: {e}"
                )))
            })?;
            file = Some((bytes.to_vec(), mime_type, filename));
            break;
        }
    }

    let (bytes, mime_type, filename) =
        file.ok_or(UploadApiError(UploadPhotoError::MissingFile))?;
    let size = bytes.len();

    let handler = state.upload_photo_handler();
    let photo = handler
        .handle(UploadPhotoCommand {
            bytes,
            mime_type,
            filename: filename.clone(),
        })
        .await
        .map_err(UploadApiError)?;

    Ok(Json(UploadPhotoResponse {
        url: photo.url,
        filename,
        size,
        public_id: photo.public_id,
        width: photo.width,
        height: photo.height,
        format: photo.format,
    }))
}
