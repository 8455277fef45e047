//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no account-domain knowledge:
//! - Password hashing and policy (Argon2id)
//! - `Authorization: Bearer` header parsing
//! - Environment configuration helpers

pub mod client;
pub mod config;
pub mod password;
