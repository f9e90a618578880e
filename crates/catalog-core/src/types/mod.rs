//! Shared API types: pagination, sorting, and the response envelope.

pub mod pagination;
pub mod response;
pub mod sorting;

pub use pagination::{PageRequest, PageResponse};
pub use response::ApiResponse;
pub use sorting::SortDirection;
