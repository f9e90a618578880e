//! # catalog-core
//!
//! Core crate for the Catalog API. Contains configuration schemas,
//! pagination/sorting types, the response envelope, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Catalog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
