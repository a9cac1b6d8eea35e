//! Authentication endpoint collaborator.

use async_trait::async_trait;
use mailplan_core::models::auth::{LoginRequest, TokenResponse};

use crate::error::AuthError;

/// The external authentication endpoint, abstracted so the session core can
/// be exercised without a network.
///
/// Implementations map credential rejection to
/// [`AuthError::InvalidCredentials`] and transport failures to
/// [`AuthError::Unreachable`].
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Submit credentials, returning the signed token on success.
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AuthError>;
}

#[async_trait]
impl<B: AuthBackend + ?Sized> AuthBackend for std::sync::Arc<B> {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, AuthError> {
        (**self).login(request).await
    }
}
