//! # catalog-auth
//!
//! Password hashing (Argon2id) and JWT issuance/verification for the
//! Catalog API.

pub mod jwt;
pub mod password;
