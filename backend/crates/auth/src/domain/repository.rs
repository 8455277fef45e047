//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{UserId, email::Email, page::PageRequest};
use crate::error::AuthResult;

/// User store
///
/// Emails are matched on their lowercased form; the store enforces that no
/// two users share one.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    ///
    /// Fails with `AuthError::DuplicateEmail` when the email is taken.
    async fn insert(&self, user: &User) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Replace the stored record with `user`
    ///
    /// Fails with `AuthError::UserNotFound` when the row no longer exists.
    async fn update(&self, user: &User) -> AuthResult<User>;

    /// Delete a user; deleting a missing user is not an error
    async fn delete(&self, user_id: &UserId) -> AuthResult<()>;

    /// Total number of users
    async fn count(&self) -> AuthResult<i64>;

    /// One page of users, newest first
    async fn list_page(&self, page: PageRequest) -> AuthResult<Vec<User>>;
}
