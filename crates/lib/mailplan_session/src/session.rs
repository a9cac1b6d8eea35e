//! Session lifecycle: login, logout, restore, and identity publication.

use std::sync::RwLock;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use mailplan_core::auth::claims;
use mailplan_core::models::auth::{
    Identity, LoginRequest, ROLE_ADMIN, ROLE_USER, TokenClaims, TokenResponse,
};

use crate::backend::AuthBackend;
use crate::error::AuthError;
use crate::routing::{self, RouteDecision, RouteTarget};
use crate::store::{ACCESS_TOKEN_KEY, CURRENT_USER_KEY, SessionStore};

/// Session behavior switches.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Fail `login` when the returned token's claims do not decode.
    ///
    /// Off by default: the token is kept and the condition is only logged,
    /// matching the lenient behavior the console has always had.
    pub reject_malformed_tokens: bool,
}

/// In-memory view of the stored credential.
#[derive(Debug, Clone)]
struct StoredToken {
    raw: String,
    /// `None` when the raw token did not decode (lenient mode keeps it).
    claims: Option<TokenClaims>,
}

/// Owns the current token and derived identity, decides authentication
/// state, and publishes identity changes to subscribers.
///
/// Constructed once at application start and shared by reference; all
/// mutation happens through [`SessionManager::login`] and
/// [`SessionManager::logout`].
pub struct SessionManager {
    backend: Box<dyn AuthBackend>,
    store: Box<dyn SessionStore>,
    config: SessionConfig,
    token: RwLock<Option<StoredToken>>,
    identity_tx: watch::Sender<Option<Identity>>,
}

impl SessionManager {
    /// Build a manager and restore any session the store still holds.
    pub fn new<B, S>(backend: B, store: S, config: SessionConfig) -> Self
    where
        B: AuthBackend + 'static,
        S: SessionStore + 'static,
    {
        let (identity_tx, _) = watch::channel(None);
        let manager = Self {
            backend: Box::new(backend),
            store: Box::new(store),
            config,
            token: RwLock::new(None),
            identity_tx,
        };
        manager.restore();
        manager
    }

    /// Re-derive session state from the persisted token, if any.
    ///
    /// A stored, unexpired token brings the identity back — preferring the
    /// cached snapshot when it parses and matches the token's subject —
    /// anything else clears both slots.
    fn restore(&self) {
        let Some(raw) = self.store.get(ACCESS_TOKEN_KEY) else {
            return;
        };
        let token_claims = match claims::decode_claims(&raw) {
            Ok(c) if !c.is_expired_at(Utc::now().timestamp()) => c,
            _ => {
                debug!("stored token malformed or expired; clearing session");
                self.clear_persisted();
                return;
            }
        };
        let identity = self
            .store
            .get(CURRENT_USER_KEY)
            .and_then(|json| serde_json::from_str::<Identity>(&json).ok())
            .filter(|cached| cached.username == token_claims.sub)
            .unwrap_or_else(|| Identity::from_claims(&token_claims));
        *self.token.write().expect("session lock") = Some(StoredToken {
            raw,
            claims: Some(token_claims),
        });
        info!(username = %identity.username, "session restored from storage");
        self.identity_tx.send_replace(Some(identity));
    }

    /// Submit credentials to the authentication endpoint and install the
    /// returned token.
    ///
    /// Claim decoding failures complete the login by default: the token is
    /// persisted, no identity is published, and the condition is logged.
    /// With [`SessionConfig::reject_malformed_tokens`] set, the login fails
    /// with [`AuthError::MalformedToken`] and storage is cleared.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, AuthError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.backend.login(&request).await?;

        self.store.set(ACCESS_TOKEN_KEY, &response.token);

        match claims::decode_claims(&response.token) {
            Ok(token_claims) => {
                let identity = Identity::from_claims(&token_claims);
                match serde_json::to_string(&identity) {
                    Ok(json) => self.store.set(CURRENT_USER_KEY, &json),
                    Err(e) => warn!(error = %e, "failed to cache identity snapshot"),
                }
                *self.token.write().expect("session lock") = Some(StoredToken {
                    raw: response.token.clone(),
                    claims: Some(token_claims),
                });
                info!(username = %identity.username, "login succeeded");
                self.identity_tx.send_replace(Some(identity));
            }
            Err(e) => {
                if self.config.reject_malformed_tokens {
                    self.clear_persisted();
                    return Err(e.into());
                }
                warn!(error = %e, "token claims did not decode; session left without identity");
                *self.token.write().expect("session lock") = Some(StoredToken {
                    raw: response.token.clone(),
                    claims: None,
                });
            }
        }

        Ok(response)
    }

    /// Clear the persisted token and identity and publish a signed-out
    /// state.
    ///
    /// Idempotent; every call publishes `None` to current subscribers.
    pub fn logout(&self) {
        self.clear_persisted();
        *self.token.write().expect("session lock") = None;
        debug!("session cleared");
        self.identity_tx.send_replace(None);
    }

    fn clear_persisted(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(CURRENT_USER_KEY);
    }

    // -----------------------------------------------------------------------
    // Read-only queries
    // -----------------------------------------------------------------------

    /// Whether a token is present and unexpired right now.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .expect("session lock")
            .as_ref()
            .and_then(|t| t.claims.as_ref())
            .is_some_and(|c| !c.is_expired_at(Utc::now().timestamp()))
    }

    /// Raw token for `Authorization: Bearer` headers.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .expect("session lock")
            .as_ref()
            .map(|t| t.raw.clone())
    }

    /// Synchronous identity snapshot.
    pub fn current_identity(&self) -> Option<Identity> {
        self.identity_tx.borrow().clone()
    }

    /// Whether the current identity holds `role`. False without an identity.
    pub fn has_role(&self, role: &str) -> bool {
        self.current_identity()
            .is_some_and(|identity| identity.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    pub fn is_user(&self) -> bool {
        self.has_role(ROLE_USER)
    }

    /// Id of the logged-in user, if any.
    pub fn user_id(&self) -> Option<String> {
        self.current_identity().map(|identity| identity.id)
    }

    /// Subscribe to identity changes. The receiver immediately observes the
    /// current value, then every subsequent change.
    pub fn identity_changes(&self) -> watch::Receiver<Option<Identity>> {
        self.identity_tx.subscribe()
    }

    /// Decide a navigation attempt against the current session state.
    pub fn admit(&self, target: &RouteTarget) -> RouteDecision {
        let roles = self
            .current_identity()
            .map(|identity| identity.roles)
            .unwrap_or_default();
        routing::admit(self.is_authenticated(), &roles, target)
    }
}
