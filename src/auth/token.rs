use crate::config::{Config, MAX_TOKEN_TTL_HOURS};
use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a bearer token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Identifier of the user the token was issued to.
    pub user_id: i32,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Signing material for bearer tokens, derived once from `Config`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    /// `ttl_hours` is clamped to `1..=MAX_TOKEN_TTL_HOURS`.
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours.clamp(1, MAX_TOKEN_TTL_HOURS)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_hours)
    }
}

/// Generates a signed token for a given user ID.
///
/// The token expires `ttl_hours` after issuance (420 hours by default).
pub fn generate_token(keys: &TokenKeys, user_id: i32) -> Result<String, AppError> {
    let expiration = Utc::now()
        .checked_add_signed(keys.ttl)
        .ok_or_else(|| AppError::Internal("Token expiry overflows".into()))?
        .timestamp() as usize;

    let claims = Claims {
        user_id,
        exp: expiration,
    };

    encode(&Header::default(), &claims, &keys.encoding)
        .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
}

/// Verifies a token string and decodes its claims.
///
/// Signature and expiration are both checked. Any failure (malformed, expired,
/// signed with another key) yields `AppError::InvalidCredential`.
pub fn verify_token(keys: &TokenKeys, token: &str) -> Result<Claims, AppError> {
    let data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(data.claims)
}

/// Verifies the raw value of an `Authorization` header.
///
/// A leading `"Bearer "` is stripped when present, so a bare token is accepted too.
pub fn verify_credential(keys: &TokenKeys, header: Option<&str>) -> Result<Claims, AppError> {
    let raw = header.ok_or(AppError::MissingCredential)?;
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    verify_token(keys, token)
}
