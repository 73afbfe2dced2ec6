//! Access-token generation/validation and refresh-token helpers.
//!
//! Access tokens are HS256-signed JWTs carrying a [`Claims`] payload. Refresh
//! tokens are opaque random strings; only their SHA-256 hash is stored
//! server-side so a database leak does not compromise active sessions.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::server::error::{auth::AuthError, AppError};

/// Number of random characters in an opaque refresh token.
const REFRESH_TOKEN_LEN: usize = 64;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject, the user's database id.
    pub sub: i32,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Signing configuration shared by token generation and validation.
#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub access_expiry_mins: i64,
    pub refresh_expiry_days: i64,
}

impl TokenConfig {
    pub fn new(secret: String, access_expiry_mins: i64, refresh_expiry_days: i64) -> Self {
        Self {
            secret,
            access_expiry_mins,
            refresh_expiry_days,
        }
    }
}

/// Generates an HS256 access token for the given user.
pub fn generate_access_token(user_id: i32, config: &TokenConfig) -> Result<String, AppError> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: user_id,
        exp: now + config.access_expiry_mins * 60,
        iat: now,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(AuthError::InvalidToken)?;

    Ok(token)
}

/// Validates an access token signature and expiry, returning the embedded [`Claims`].
pub fn validate_access_token(token: &str, config: &TokenConfig) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Generates a new opaque refresh token.
pub fn generate_refresh_token() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), REFRESH_TOKEN_LEN)
}

/// Hashes a refresh token for storage or lookup.
pub fn hash_refresh_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    format!("{:x}", digest)
}
