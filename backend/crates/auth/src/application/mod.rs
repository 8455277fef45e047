//! Application Layer
//!
//! Use cases and application services.

pub mod access_guard;
pub mod admin_policy;
pub mod authenticator;
pub mod config;
pub mod list_users;
pub mod profile;
pub mod seed_admins;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use access_guard::{AccessGuard, DenialReason};
pub use admin_policy::{AdminAllowList, AdminPolicy};
pub use authenticator::Authenticator;
pub use config::AuthConfig;
pub use list_users::{ListUsersOutput, ListUsersUseCase};
pub use profile::{DeleteAccountUseCase, UpdateProfileInput, UpdateProfileUseCase};
pub use seed_admins::SeedAdminsUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token::{TokenError, TokenIssuer};
