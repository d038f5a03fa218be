//! Shared-password authenticator with constant-time comparison.

use async_trait::async_trait;
use rand::distributions::Alphanumeric;
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::ports::Authenticator;

const TOKEN_LENGTH: usize = 48;

pub struct StaticPasswordAuthenticator {
    password: SecretString,
}

impl StaticPasswordAuthenticator {
    pub fn new(password: SecretString) -> Self {
        Self { password }
    }
}

#[async_trait]
impl Authenticator for StaticPasswordAuthenticator {
    async fn verify(&self, submitted: &str) -> bool {
        let expected = self.password.expose_secret().as_bytes();
        let submitted = submitted.as_bytes();
        // ct_eq needs equal lengths; a length mismatch is already a
        // public fact, not a timing leak on the secret's content.
        if expected.len() != submitted.len() {
            return false;
        }
        expected.ct_eq(submitted).into()
    }

    fn issue_token(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }
}
