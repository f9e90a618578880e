//! # catalog-api
//!
//! HTTP layer for the Catalog API: axum handlers, the router, request and
//! response DTOs, extractors, and the `AppError` → HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
