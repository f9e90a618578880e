//! Profile handlers.

use axum::Json;
use axum::extract::State;

use catalog_core::error::AppError;
use catalog_core::types::ApiResponse;

use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/me
pub async fn me(
    State(state): State<AppState>,
    auth: CurrentUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_repo
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok("Profile fetched", user.into())))
}
