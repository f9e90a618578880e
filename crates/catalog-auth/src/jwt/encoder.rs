//! JWT token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use catalog_core::config::AuthConfig;
use catalog_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Creates signed JWT access and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in hours.
    refresh_ttl_hours: i64,
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: config.jwt_access_ttl_minutes as i64,
            refresh_ttl_hours: config.jwt_refresh_ttl_hours as i64,
        }
    }

    /// Generates an access + refresh token pair for the given user.
    pub fn issue_token_pair(&self, user_id: i64) -> Result<TokenPair, AppError> {
        let access_token = self.issue(user_id, TokenType::Access)?;
        let refresh_token = self.issue(user_id, TokenType::Refresh)?;
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Generates a standalone access token (used after refresh).
    pub fn issue_access_token(&self, user_id: i64) -> Result<String, AppError> {
        self.issue(user_id, TokenType::Access)
    }

    fn issue(&self, user_id: i64, token_type: TokenType) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = match token_type {
            TokenType::Access => now + chrono::Duration::minutes(self.access_ttl_minutes),
            TokenType::Refresh => now + chrono::Duration::hours(self.refresh_ttl_hours),
        };

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish()
    }
}
