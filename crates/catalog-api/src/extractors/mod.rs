//! Custom axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::{CurrentUser, RefreshUser};
pub use pagination::ListParams;
