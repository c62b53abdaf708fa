/// Access token signing and validation
///
/// Tokens are signed with HS256 using a secret supplied through
/// configuration. The keys live inside [`TokenService`], which is cloned into
/// every handler and middleware that needs it; there is no global key state.
use crate::error::{AppError, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by every access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as a string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Username
    pub username: String,
}

/// Issues and validates access tokens with a shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_seconds: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiry_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_seconds: expiry_seconds as i64,
        }
    }

    /// Issue a signed access token for the given user
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String> {
        let now = Utc::now();
        let expiry = now + Duration::seconds(self.expiry_seconds);

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            username: username.to_string(),
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Validate a token's signature and expiry, returning its claims
    ///
    /// Expired tokens and bad signatures surface as distinct errors so the
    /// middleware can report them separately.
    pub fn validate(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(JWT_ALGORITHM);
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }

    /// Token lifetime in seconds, as reported in login responses
    pub fn expiry_seconds(&self) -> i64 {
        self.expiry_seconds
    }
}
