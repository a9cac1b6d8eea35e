//! Authentication domain models.

use serde::{Deserialize, Serialize};

/// Role name granted to administrators.
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

/// Role name granted to regular users.
pub const ROLE_USER: &str = "ROLE_USER";

/// Credentials submitted to the authentication endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authentication endpoint response carrying the signed token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// JWT claims embedded in access tokens.
///
/// Decoded client-side for UI convenience only; signature verification is
/// the backend's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — the username (standard JWT `sub` claim).
    pub sub: String,
    /// Role names (e.g. `["ROLE_ADMIN"]`).
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiry (unix timestamp, seconds).
    pub exp: i64,
    /// Issued at (unix timestamp, seconds).
    #[serde(default)]
    pub iat: Option<i64>,
}

impl TokenClaims {
    /// Whether the token is expired at `now` (unix seconds). The token is
    /// valid strictly before its expiry instant.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Decoded, user-facing view of a token's claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub roles: Vec<String>,
}

impl Identity {
    /// Derive the identity from decoded claims. The backend issues `sub`
    /// as the username, so it doubles as the id.
    pub fn from_claims(claims: &TokenClaims) -> Self {
        Self {
            id: claims.sub.clone(),
            username: claims.sub.clone(),
            roles: claims.roles.clone(),
        }
    }

    /// Whether this identity holds the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_derives_id_and_username_from_sub() {
        let claims = TokenClaims {
            sub: "alice".into(),
            roles: vec![ROLE_USER.into()],
            exp: 2_000_000_000,
            iat: None,
        };
        let identity = Identity::from_claims(&claims);
        assert_eq!(identity.id, "alice");
        assert_eq!(identity.username, "alice");
        assert!(identity.has_role(ROLE_USER));
        assert!(!identity.has_role(ROLE_ADMIN));
    }

    #[test]
    fn token_is_valid_strictly_before_expiry() {
        let claims = TokenClaims {
            sub: "alice".into(),
            roles: vec![],
            exp: 100,
            iat: Some(0),
        };
        assert!(!claims.is_expired_at(99));
        assert!(claims.is_expired_at(100));
        assert!(claims.is_expired_at(101));
    }

    #[test]
    fn claims_tolerate_missing_optional_fields() {
        let claims: TokenClaims =
            serde_json::from_str(r#"{"sub":"bob","exp":123}"#).expect("claims parse");
        assert_eq!(claims.sub, "bob");
        assert!(claims.roles.is_empty());
        assert_eq!(claims.iat, None);
    }
}
