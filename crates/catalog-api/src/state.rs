//! Application state shared across all handlers.

use std::sync::Arc;

use catalog_auth::jwt::{JwtDecoder, JwtEncoder};
use catalog_auth::password::PasswordHasher;
use catalog_core::config::AppConfig;
use catalog_database::repositories::{ProductRepository, UserRepository};

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; there is no other shared
/// mutable state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Product repository.
    pub product_repo: Arc<ProductRepository>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
}
