//! Auth handlers — register, login, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use catalog_auth::jwt::TokenPair;
use catalog_core::error::AppError;
use catalog_core::types::ApiResponse;
use catalog_entity::user::NewUser;

use crate::dto;
use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AccessTokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::RefreshUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    dto::validate(&req)?;

    let password_hash = state.password_hasher.hash(&req.password)?;
    let user = state
        .user_repo
        .create(&NewUser {
            name: req.name,
            email: req.email,
            gender: req.gender,
            password_hash,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("User registered", user.into())),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenPair>>, ApiError> {
    dto::validate(&req)?;

    // One generic failure for both unknown email and wrong password.
    let user = state
        .user_repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

    if !state.password_hasher.verify(&req.password, &user.password_hash)? {
        return Err(AppError::unauthorized("Invalid credentials").into());
    }

    let tokens = state.jwt_encoder.issue_token_pair(user.id)?;

    Ok(Json(ApiResponse::ok("Login successful", tokens)))
}

/// POST /api/auth/refresh
///
/// Requires a refresh token in the Authorization header; access tokens are
/// rejected by the extractor.
pub async fn refresh(
    State(state): State<AppState>,
    refresh: RefreshUser,
) -> Result<Json<ApiResponse<AccessTokenResponse>>, ApiError> {
    let access_token = state.jwt_encoder.issue_access_token(refresh.user_id)?;

    Ok(Json(ApiResponse::ok(
        "Token refreshed",
        AccessTokenResponse { access_token },
    )))
}
