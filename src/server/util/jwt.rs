use chrono::{Duration, Utc};
use entity::user::UserRole;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Lifetime of an issued token.
const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried by every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub role: UserRole,
    pub sub: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
}

/// Signs and verifies HS256 bearer tokens with a shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    keys: Arc<Keys>,
}

impl TokenIssuer {
    pub fn new(secret: &str, issuer: impl Into<String>) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                issuer: issuer.into(),
            }),
        }
    }

    /// Issues a token for the user that expires after 24 hours.
    pub fn issue(&self, user_id: i32, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            role,
            sub: user_id.to_string(),
            iss: self.keys.issuer.clone(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        self.encode(&claims)
    }

    /// Verifies signature, algorithm, issuer, expiry and not-before.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_nbf = true;
        validation.set_issuer(&[self.keys.issuer.as_str()]);

        decode::<Claims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.keys.encoding)
            .map_err(|e| InternalError::TokenEncode(e).into())
    }
}
