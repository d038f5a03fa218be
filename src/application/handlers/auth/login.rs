//! LoginHandler - exchange the shared admin password for a bearer
//! token.
//!
//! Tokens are opaque and unrecorded; the advertised lifetime is a hint
//! for the client to discard its copy, not something the server
//! enforces.

use std::sync::Arc;

use thiserror::Error;

use crate::ports::Authenticator;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub expires_in_minutes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Invalid password")]
    InvalidCredentials,
}

pub struct LoginHandler {
    authenticator: Arc<dyn Authenticator>,
    token_ttl_minutes: u64,
}

impl LoginHandler {
    pub fn new(authenticator: Arc<dyn Authenticator>, token_ttl_minutes: u64) -> Self {
        Self {
            authenticator,
            token_ttl_minutes,
        }
    }

    pub async fn handle(&self, command: LoginCommand) -> Result<LoginResult, LoginError> {
        if !self.authenticator.verify(&command.password).await {
            tracing::warn!("login attempt with wrong password");
            return Err(LoginError::InvalidCredentials);
        }

        tracing::info!("admin login succeeded");
        Ok(LoginResult {
            token: self.authenticator.issue_token(),
            expires_in_minutes: self.token_ttl_minutes,
        })
    }
}
