//! # catalog-entity
//!
//! Domain models for the Catalog API: users and the products they own.

pub mod product;
pub mod user;
