//! Product entity.

pub mod model;
pub mod sort;

pub use model::{NewProduct, Product, ProductPatch};
pub use sort::{ProductSort, ProductSortKey};
