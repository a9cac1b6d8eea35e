//! Unverified JWT claim decoding.
//!
//! The console never holds the signing secret; it decodes the payload
//! segment purely so the UI can show who is logged in and which links to
//! render. Signature verification stays on the backend.

use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::debug;

use super::ClaimsError;
use crate::models::auth::TokenClaims;

/// Decode a token's claims without verifying the signature.
///
/// Expiry is not validated here; callers compare `exp` against wall-clock
/// time themselves so an expired token can still be inspected.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| {
            debug!(error = %e, "token claim decode failed");
            ClaimsError::Malformed(e.to_string())
        })
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    use super::*;

    fn mint(claims: &TokenClaims) -> String {
        // HS512 to match what the backend signs with; the decoder must not care.
        encode(
            &Header::new(Algorithm::HS512),
            claims,
            &EncodingKey::from_secret(b"some-backend-secret"),
        )
        .expect("encode token")
    }

    #[test]
    fn decodes_claims_without_the_signing_secret() {
        let token = mint(&TokenClaims {
            sub: "alice".into(),
            roles: vec!["ROLE_ADMIN".into()],
            exp: 2_000_000_000,
            iat: Some(1_000_000_000),
        });
        let claims = decode_claims(&token).expect("decode");
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.roles, vec!["ROLE_ADMIN".to_string()]);
        assert_eq!(claims.exp, 2_000_000_000);
    }

    #[test]
    fn decodes_expired_claims() {
        let token = mint(&TokenClaims {
            sub: "alice".into(),
            roles: vec![],
            exp: 1,
            iat: None,
        });
        let claims = decode_claims(&token).expect("decode");
        assert!(claims.is_expired_at(2));
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode_claims("not-a-token").is_err());
        assert!(decode_claims("a.b.c").is_err());
        assert!(decode_claims("").is_err());
    }

    #[test]
    fn rejects_payload_missing_sub() {
        // Valid JWT shape, but the payload does not match the claims type.
        let token = encode(
            &Header::default(),
            &serde_json::json!({"exp": 2_000_000_000}),
            &EncodingKey::from_secret(b"k"),
        )
        .expect("encode token");
        assert!(decode_claims(&token).is_err());
    }
}
