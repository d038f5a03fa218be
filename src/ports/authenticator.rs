//! Authenticator port: verify the shared admin password.

use async_trait::async_trait;

/// Verifies a submitted password against the one server-held secret.
///
/// # Contract
///
/// Implementations must compare in constant time. A successful
/// verification entitles the caller to an opaque bearer token; the
/// server keeps no record of issued tokens (expiry is enforced purely
/// client-side).
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns true iff the submitted password matches the secret.
    async fn verify(&self, submitted: &str) -> bool;

    /// Mints a fresh opaque bearer token.
    fn issue_token(&self) -> String;
}
