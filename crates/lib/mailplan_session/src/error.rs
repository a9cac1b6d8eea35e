//! Session error types.

use mailplan_core::auth::ClaimsError;
use thiserror::Error;

/// Authentication failures surfaced to the UI.
///
/// Shown as transient notifications; never retried automatically.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authentication endpoint rejected the credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The authentication endpoint could not be reached.
    #[error("Authentication service unreachable: {0}")]
    Unreachable(String),

    /// The returned token's claims could not be decoded.
    #[error("Malformed token: {0}")]
    MalformedToken(String),
}

impl From<ClaimsError> for AuthError {
    fn from(e: ClaimsError) -> Self {
        match e {
            ClaimsError::Malformed(msg) => AuthError::MalformedToken(msg),
        }
    }
}
