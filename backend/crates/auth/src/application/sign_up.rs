//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::PasswordHasher;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    person_name::PersonName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasher>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, hasher: Arc<PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<User> {
        let email = Email::new(input.email)?;
        let first_name = PersonName::new("first_name", input.first_name)?;
        let last_name = PersonName::new("last_name", input.last_name)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = UserPassword::from_raw(&raw_password, &self.hasher)?;
        let user = User::new(email, first_name, last_name, password_hash);

        // A concurrent registration can still win between the check and the
        // insert; the store's unique index reports it as DuplicateEmail.
        let user = self.repo.insert(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User signed up"
        );

        Ok(user)
    }
}
