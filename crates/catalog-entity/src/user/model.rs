//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::gender::Gender;

/// A registered user.
///
/// Users are created only via registration; this surface never updates or
/// deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address; globally unique, used as the login identifier.
    pub email: String,
    /// Self-reported gender, if provided.
    pub gender: Option<Gender>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Gender, if provided.
    pub gender: Option<Gender>,
    /// Pre-hashed password.
    pub password_hash: String,
}
