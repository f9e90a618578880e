//! Product entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product owned by a single user.
///
/// Visible and mutable only through its owner's identity; the owner id is
/// always taken from the authenticated caller, never from client input.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: i64,
    /// Product name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Price with two fractional digits, serialized as a string to avoid
    /// floating-point drift.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Owning user's id.
    pub owner_id: i64,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

/// Data required to insert a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Product name.
    pub name: String,
    /// Description; defaults to the empty string.
    pub description: String,
    /// Price; defaults to zero.
    pub price: Decimal,
}

/// Partial update of a product's mutable fields.
///
/// Only fields that are `Some` are applied; everything else is left
/// untouched. `updated_at` is refreshed whenever any field is applied.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    /// New name, if supplied.
    pub name: Option<String>,
    /// New description, if supplied.
    pub description: Option<String>,
    /// New price, if supplied.
    pub price: Option<Decimal>,
}

impl ProductPatch {
    /// Whether the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }
}
