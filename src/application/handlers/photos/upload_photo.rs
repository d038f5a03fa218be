//! UploadPhotoHandler - validate and forward member photos to the
//! image host.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::ports::{PhotoError, PhotoStore, StoredPhoto};

static ALLOWED_MIME_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["image/jpeg", "image/jpg", "image/png"]));

#[derive(Debug, Clone)]
pub struct UploadPhotoCommand {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub filename: String,
}

#[derive(Debug, Error)]
pub enum UploadPhotoError {
    #[error("Only JPEG and PNG images are allowed")]
    UnsupportedMediaType,

    #[error("No image file provided")]
    MissingFile,

    /// The multipart body itself could not be read; a client fault,
    /// unlike `Store` which covers image host failures.
    #[error("Malformed upload request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Store(#[from] PhotoError),
}

pub struct UploadPhotoHandler {
    store: Arc<dyn PhotoStore>,
}

impl UploadPhotoHandler {
    pub fn new(store: Arc<dyn PhotoStore>) -> Self {
        Self { store }
    }

    /// Rejects non-image payloads before any bytes leave the process.
    pub async fn handle(&self, command: UploadPhotoCommand) -> Result<StoredPhoto, UploadPhotoError> {
        if command.bytes.is_empty() {
            return Err(UploadPhotoError::MissingFile);
        }
        if !ALLOWED_MIME_TYPES.contains(command.mime_type.as_str()) {
            tracing::warn!(mime_type = %command.mime_type, "photo upload rejected");
            return Err(UploadPhotoError::UnsupportedMediaType);
        }

        let photo = self
            .store
            .upload(command.bytes, &command.mime_type, &command.filename)
            .await?;
        tracing::info!(url = %photo.url, "photo uploaded");
        Ok(photo)
    }
}
