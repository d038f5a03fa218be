//! Image host configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Cloudinary configuration for photo uploads
#[derive(Debug, Clone, Deserialize)]
pub struct PhotosConfig {
    /// Cloudinary cloud name
    pub cloud_name: String,

    /// Cloudinary API key
    pub api_key: String,

    /// Cloudinary API secret, used to sign upload requests
    pub api_secret: SecretString,
}

impl PhotosConfig {
    /// Validate image host configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cloud_name.is_empty() {
            return Err(ValidationError::MissingRequired(
                "GYMDESK__PHOTOS__CLOUD_NAME",
            ));
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("GYMDESK__PHOTOS__API_KEY"));
        }
        if self.api_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired(
                "GYMDESK__PHOTOS__API_SECRET",
            ));
        }
        Ok(())
    }
}
