//! Bearer-token extractors — pull the JWT from the Authorization header,
//! validate it, and inject the caller's identity into handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use catalog_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, extracted from a valid access token.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    /// The caller's user id.
    pub user_id: i64,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.jwt_decoder.decode_access_token(token)?;
        Ok(Self {
            user_id: claims.user_id()?,
        })
    }
}

/// The caller of the refresh endpoint, extracted from a valid refresh
/// token. Access tokens are rejected here.
#[derive(Debug, Clone, Copy)]
pub struct RefreshUser {
    /// The caller's user id.
    pub user_id: i64,
}

impl FromRequestParts<AppState> for RefreshUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.jwt_decoder.decode_refresh_token(token)?;
        Ok(Self {
            user_id: claims.user_id()?,
        })
    }
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))
}
