//! Photo store port: upload member photos to an external image host.

use async_trait::async_trait;
use thiserror::Error;

/// A photo persisted on the image host.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPhoto {
    /// Public HTTPS URL of the stored image.
    pub url: String,
    /// Host-side identifier (used for overwrites).
    pub public_id: String,
    /// Pixel width as reported by the host, when available.
    pub width: Option<u32>,
    /// Pixel height as reported by the host, when available.
    pub height: Option<u32>,
    /// Normalized format (e.g. "jpg", "png"), when available.
    pub format: Option<String>,
}

/// Errors from the image host.
#[derive(Debug, Clone, Error)]
pub enum PhotoError {
    /// The host rejected the upload (bad credentials, quota, payload).
    #[error("Upload rejected: {0}")]
    Rejected(String),

    /// The host was unreachable or returned an unexpected response.
    #[error("Image host unavailable: {0}")]
    Unavailable(String),
}

/// Uploads image bytes to the external host.
///
/// MIME validation is the caller's responsibility and must happen
/// before any upload attempt; implementations receive only JPEG/PNG.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Upload an image, returning its public URL and host id.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        mime_type: &str,
        filename: &str,
    ) -> Result<StoredPhoto, PhotoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn PhotoStore) {}
    }
}
