//! Cloudinary adapter: signed direct uploads over the REST API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::PhotosConfig;
use crate::ports::{PhotoError, PhotoStore, StoredPhoto};

const UPLOAD_FOLDER: &str = "GYM";

pub struct CloudinaryPhotoStore {
    client: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: SecretString,
}

/// Subset of the upload response we care about.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
    width: Option<u32>,
    height: Option<u32>,
    format: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadErrorBody {
    error: UploadErrorMessage,
}

#[derive(Debug, Deserialize)]
struct UploadErrorMessage {
    message: String,
}

impl CloudinaryPhotoStore {
    pub fn new(config: &PhotosConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }

    /// Signature is the SHA-256 hex digest of the alphabetically
    /// sorted parameters with the API secret appended.
    fn sign(&self, public_id: &str, timestamp: i64) -> String {
        let to_sign = format!(
            "folder={UPLOAD_FOLDER}&overwrite=true&public_id={public_id}&signature_algorithm=sha256&timestamp={timestamp}{}",
            self.api_secret.expose_secret()
        );
        hex::encode(Sha256::digest(to_sign.as_bytes()))
    }
}

/// Prefixes with the roster namespace and a millisecond stamp, and
/// strips the extension as the host derives the format itself.
fn public_id_for(filename: &str, millis: i64) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => filename,
    };
    format!("gym-members-{millis}-{stem}")
}

#[async_trait]
impl PhotoStore for CloudinaryPhotoStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        mime_type: &str,
        filename: &str,
    ) -> Result<StoredPhoto, PhotoError> {
        let timestamp = chrono::Utc::now().timestamp();
        let public_id = public_id_for(filename, chrono::Utc::now().timestamp_millis());
        let signature = self.sign(&public_id, timestamp);

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_type)
            .map_err(|e| PhotoError::Rejected(format!("bad mime type: {e}")))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .text("folder", UPLOAD_FOLDER)
            .text("public_id", public_id)
            .text("overwrite", "true");

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| PhotoError::Unavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<UploadErrorBody>()
                .await
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("status {status}"));
            tracing::error!(%status, %message, "image host rejected upload");
            return Err(PhotoError::Rejected(message));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| PhotoError::Unavailable(format!("malformed response: {e}")))?;

        Ok(StoredPhoto {
            url: body.secure_url,
            public_id: body.public_id,
            width: body.width,
            height: body.height,
            format: body.format,
        })
    }
}
