//! Response DTOs.
//!
//! Public-facing shapes only: the password hash never appears here, and
//! timestamps serialize as RFC 3339 strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_entity::product::Product;
use catalog_entity::user::{Gender, User};

/// Public user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Gender, if provided.
    pub gender: Option<Gender>,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            gender: user.gender,
            created_at: user.created_at,
        }
    }
}

/// Public product representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    /// Product id.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Price as a string-formatted decimal.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Owning user's id.
    pub owner_id: i64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            owner_id: product.owner_id,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Response body for a successful token refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// Newly issued access token.
    pub access_token: String,
}
