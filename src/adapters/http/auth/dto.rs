use serde::{Deserialize, Serialize};

/// The password field is optional so a missing field can map to 400
/// with a named message instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in_minutes: u64,
}
