use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{config::JwtConfig, state::AppState};

/// Bearer token payload: the subject user id plus issue/expiry timestamps.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
}

/// Holds the symmetric signing material derived from configuration.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub algorithm: Algorithm,
    pub access_ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            algorithm,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            access_ttl: Duration::from_secs((ttl_minutes as u64) * 60),
        }
    }
}

impl JwtKeys {
    pub fn sign_access(&self, user_id: i64) -> anyhow::Result<String> {
        let now = jsonwebtoken::get_current_timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now as usize,
            exp: (now + self.access_ttl.as_secs()) as usize,
        };
        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding)?;
        debug!(user_id, "access token signed");
        Ok(token)
    }

    /// Checks signature and expiry with zero leeway. An expired-but-genuine
    /// token is distinguished from a forged or malformed one.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => {
                debug!(user_id = data.claims.sub, "access token verified");
                Ok(data.claims)
            }
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;

    async fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&test_state().await)
    }

    #[tokio::test]
    async fn sign_and_verify_roundtrip() {
        let keys = make_keys().await;
        let token = keys.sign_access(42).expect("sign access");
        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.sub, 42);
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn verify_rejects_expired_token() {
        let keys = make_keys().await;
        let now = jsonwebtoken::get_current_timestamp() as usize;
        let stale = Claims {
            sub: 7,
            iat: now - 120,
            exp: now - 60,
        };
        let token = encode(&Header::new(keys.algorithm), &stale, &keys.encoding).unwrap();
        assert_eq!(keys.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[tokio::test]
    async fn verify_rejects_wrong_secret() {
        let keys = make_keys().await;
        let other = JwtKeys {
            encoding: EncodingKey::from_secret(b"another-secret"),
            decoding: DecodingKey::from_secret(b"another-secret"),
            algorithm: keys.algorithm,
            access_ttl: keys.access_ttl,
        };
        let token = other.sign_access(1).expect("sign access");
        assert_eq!(keys.verify(&token).unwrap_err(), TokenError::Invalid);
    }

    #[tokio::test]
    async fn verify_rejects_garbage() {
        let keys = make_keys().await;
        assert_eq!(
            keys.verify("definitely.not.a-token").unwrap_err(),
            TokenError::Invalid
        );
    }
}
