//! Seed Admins Use Case
//!
//! Ensures every allow-listed admin email has an account.

use std::sync::Arc;

use platform::password::PasswordHasher;

use crate::application::admin_policy::AdminAllowList;
use crate::domain::entity::user::{User, UserChanges};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    person_name::PersonName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub const DEFAULT_SEED_PASSWORD: &str = "Admin1234";
pub const SEED_PLAN: &str = "Pro";

pub struct SeedAdminsUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasher>,
}

impl<R> SeedAdminsUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, hasher: Arc<PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Create `Admin User` accounts on the Pro plan for listed emails
    /// that have none yet
    ///
    /// Returns the emails that were created; existing accounts are left alone.
    pub async fn execute(
        &self,
        admins: &AdminAllowList,
        password: String,
    ) -> AuthResult<Vec<String>> {
        let raw = RawPassword::new(password)?;
        let mut seeded = Vec::new();

        for address in admins.iter() {
            let email = Email::new(address)?;
            if self.repo.find_by_email(&email).await?.is_some() {
                tracing::debug!(email = %email, "Admin already exists");
                continue;
            }

            let user = User::new(
                email,
                PersonName::from_db("Admin"),
                PersonName::from_db("User"),
                UserPassword::from_raw(&raw, &self.hasher)?,
            )
            .with_changes(UserChanges {
                plan: Some(SEED_PLAN.to_string()),
                ..Default::default()
            });

            match self.repo.insert(&user).await {
                Ok(user) => seeded.push(user.email.into_inner()),
                // Created concurrently; same outcome as skipping
                Err(AuthError::DuplicateEmail) => continue,
                Err(e) => return Err(e),
            }
        }

        tracing::info!(count = seeded.len(), seeded = ?seeded, "Admin seeding finished");

        Ok(seeded)
    }
}
