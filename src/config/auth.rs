//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Admin authentication configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// The single shared admin password
    pub admin_password: SecretString,

    /// Advertised token lifetime in minutes (enforced client-side)
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: u64,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.admin_password.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired(
                "GYMDESK__AUTH__ADMIN_PASSWORD",
            ));
        }
        if self.admin_password.expose_secret().len() < 8 {
            return Err(ValidationError::WeakAdminPassword);
        }
        if self.token_ttl_minutes == 0 || self.token_ttl_minutes > 1440 {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

fn default_token_ttl_minutes() -> u64 {
    30
}
