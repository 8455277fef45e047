//! Authenticator
//!
//! Email + password check. Knows nothing about HTTP or tokens.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordHasher};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

pub struct Authenticator<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasher>,
}

impl<R> Authenticator<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, hasher: Arc<PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Return the user when `email` exists and `password` matches
    ///
    /// `Ok(None)` covers unknown email, unparseable email and wrong password
    /// alike. The unknown-email path still runs one full verification so both
    /// failures cost the same. Only store failures are errors.
    pub async fn authenticate(&self, email: &str, password: String) -> AuthResult<Option<User>> {
        let candidate = ClearTextPassword::for_verification(password);

        let user = match Email::new(email) {
            Ok(email) => self.repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            self.hasher.verify_decoy(&candidate);
            return Ok(None);
        };

        if user.password_hash.verify(&candidate, &self.hasher) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
