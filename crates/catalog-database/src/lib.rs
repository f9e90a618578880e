//! # catalog-database
//!
//! PostgreSQL persistence for the Catalog API: pool construction, the
//! migration runner, and per-entity repositories.

pub mod connection;
pub mod migration;
pub mod repositories;
