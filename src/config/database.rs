//! Database configuration

use serde::Deserialize;

use super::error::ValidationError;

/// MongoDB configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection URL
    pub url: String,

    /// Database name
    #[serde(default = "default_database_name")]
    pub name: String,
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("GYMDESK__DATABASE__URL"));
        }
        if !self.url.starts_with("mongodb://") && !self.url.starts_with("mongodb+srv://") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingRequired("GYMDESK__DATABASE__NAME"));
        }
        Ok(())
    }
}

fn default_database_name() -> String {
    "gymdesk".to_string()
}
