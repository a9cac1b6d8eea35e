//! Client-side token handling.

pub mod claims;

use thiserror::Error;

/// Failure to decode a token's embedded claims.
#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("Malformed token: {0}")]
    Malformed(String),
}
