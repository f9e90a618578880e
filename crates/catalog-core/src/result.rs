//! Convenience result type alias for the Catalog API.

use crate::error::AppError;

/// A specialized `Result` type for Catalog operations.
pub type AppResult<T> = Result<T, AppError>;
