//! Per-entity repositories.

pub mod product;
pub mod user;

pub use product::ProductRepository;
pub use user::UserRepository;
