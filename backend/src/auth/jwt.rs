//! JWT token issuance and verification
//!
//! Tokens carry a single custom claim, the numeric user id, and expire one
//! hour after issuance (configurable). Signing keys are pre-computed once at
//! startup and shared behind `Arc`s.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, the token's sole identity claim
    pub id: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed signing keys, expensive to derive so cached in AppState
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Token codec: issues and verifies signed, time-limited session tokens
///
/// Stateless: the server holds no session records. A token is valid iff its
/// signature matches the configured secret and its expiry is in the future.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    token_expiry_secs: i64,
}

impl JwtService {
    /// Create a new token service with pre-computed keys
    ///
    /// Call once at application startup and store in AppState.
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            token_expiry_secs,
        }
    }

    /// Issue a signed token for a user id
    pub fn issue(&self, user_id: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_expiry_secs);

        let claims = Claims {
            id: user_id,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a presented token
    ///
    /// Returns the decoded claims, or `None` for any failure: malformed
    /// token, bad signature, or expiry in the past. Failures are logged and
    /// never propagate to the caller.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.keys.decoding, &Validation::default()) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!("Invalid token: {}", e);
                None
            }
        }
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn token_expiry_secs(&self) -> i64 {
        self.token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_then_verify_roundtrips_id() {
        let service = create_test_service();

        let token = service.issue(12345).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.id, 12345);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let service = create_test_service();
        assert!(service.verify("garbage").is_none());
        assert!(service.verify("invalid.token.here").is_none());
        assert!(service.verify("").is_none());
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let service = create_test_service();
        let token = service.issue(7).unwrap();

        // Flip the payload segment; signature no longer matches
        let mut parts: Vec<&str> = token.split('.').collect();
        let tampered_payload = parts[1].replace(|c: char| c == 'a', "b");
        parts[1] = &tampered_payload;
        let tampered = parts.join(".");

        assert!(service.verify(&tampered).is_none());
    }

    #[test]
    fn test_token_from_other_secret_is_invalid() {
        let service = create_test_service();
        let other = JwtService::new("another-secret", 3600);

        let token = other.issue(1).unwrap();
        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_expired_token_is_invalid() {
        // Negative expiry puts exp in the past; leeway in Validation::default
        // is 60s, so go well beyond it
        let service = JwtService::new("test-secret", -120);
        let token = service.issue(1).unwrap();
        assert!(service.verify(&token).is_none());
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let cloned = service.clone();

        let token = service.issue(9).unwrap();
        assert_eq!(cloned.verify(&token).unwrap().id, 9);
    }
}
