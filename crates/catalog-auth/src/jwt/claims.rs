//! JWT claims structure used in access and refresh tokens.

use serde::{Deserialize, Serialize};

use catalog_core::error::AppError;

/// JWT claims payload embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user id, as a string.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token kind: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token, accepted only on the refresh endpoint.
    Refresh,
}

impl Claims {
    /// Returns the numeric user id from the subject claim.
    pub fn user_id(&self) -> Result<i64, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid subject claim"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_parses_the_subject() {
        let claims = Claims {
            sub: "42".to_string(),
            iat: 0,
            exp: 0,
            token_type: TokenType::Access,
        };
        assert_eq!(claims.user_id().unwrap(), 42);
    }

    #[test]
    fn non_numeric_subject_is_rejected() {
        let claims = Claims {
            sub: "mallory".to_string(),
            iat: 0,
            exp: 0,
            token_type: TokenType::Access,
        };
        assert!(claims.user_id().is_err());
    }
}
