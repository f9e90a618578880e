//! Request DTOs with validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use catalog_entity::product::ProductPatch;
use catalog_entity::user::Gender;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address; the login identifier.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password; write-only, never echoed back.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Optional gender; serde rejects values outside the enumeration.
    pub gender: Option<Gender>,
}

/// Login request body. Presence checks only — no length rule on the
/// password at login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Product creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Product name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Description; defaults to the empty string.
    pub description: Option<String>,
    /// Price; defaults to zero.
    pub price: Option<Decimal>,
}

/// Product update request body — the same shape as creation but with every
/// field optional. Only supplied fields are applied.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    /// New name, if supplied.
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    /// New description, if supplied.
    pub description: Option<String>,
    /// New price, if supplied.
    pub price: Option<Decimal>,
}

impl UpdateProductRequest {
    /// Convert into the explicit patch structure applied by the repository.
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_accepts_json_numbers() {
        let req: CreateProductRequest =
            serde_json::from_value(serde_json::json!({"name": "Widget", "price": 10.00})).unwrap();
        assert_eq!(req.price.unwrap().to_string(), "10");
    }

    #[test]
    fn partial_update_maps_only_supplied_fields() {
        let req: UpdateProductRequest =
            serde_json::from_value(serde_json::json!({"price": 1000})).unwrap();
        let patch = req.into_patch();
        assert!(patch.name.is_none());
        assert!(patch.description.is_none());
        assert_eq!(patch.price.unwrap().to_string(), "1000");
    }

    #[test]
    fn invalid_gender_is_rejected_at_deserialization() {
        let result: Result<RegisterRequest, _> = serde_json::from_value(serde_json::json!({
            "name": "a",
            "email": "a@x.com",
            "password": "secret1",
            "gender": "martian",
        }));
        assert!(result.is_err());
    }
}
