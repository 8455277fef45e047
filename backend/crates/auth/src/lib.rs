//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Token issuing, authentication, access guard, admin policy, use cases
//! - `infra/` - PostgreSQL and in-memory user stores
//! - `presentation/` - HTTP handlers, DTOs, bearer middleware, routers
//!
//! ## Features
//! - Registration with email + password
//! - Login returning a short-lived HS256 bearer token
//! - Profile self-service (read, update, delete)
//! - Admin listing gated by an email allow-list
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, verified in constant time
//! - Unknown email and wrong password are indistinguishable (same cost, same error)
//! - Stateless tokens; every request re-reads the user, so deleted accounts lose access at once
//! - Denial reasons stay in the logs; clients only see "Not authenticated"

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::{CurrentUser, require_access_token};
pub use presentation::router::{auth_router, users_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
