//! Profile Use Cases
//!
//! Self-service update and deletion of the current user's account.

use std::sync::Arc;

use kernel::error::app_error::AppError;
use platform::password::PasswordHasher;

use crate::domain::entity::user::{NotificationPrefs, User, UserChanges};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    person_name::PersonName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::AuthResult;

/// Plans are stored in a VARCHAR(50) column
pub const PLAN_MAX_LENGTH: usize = 50;

/// Profile update input; `None` leaves a field unchanged
#[derive(Default)]
pub struct UpdateProfileInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub plan: Option<String>,
    pub addons: Option<Vec<String>>,
    pub notification_prefs: Option<NotificationPrefs>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasher>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, hasher: Arc<PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    /// Validate every provided field, then write the whole new record
    pub async fn execute(&self, current: &User, input: UpdateProfileInput) -> AuthResult<User> {
        let changes = self.validate(input)?;
        if changes.is_empty() {
            return Ok(current.clone());
        }

        let password_changed = changes.password_hash.is_some();
        let updated = self.repo.update(&current.with_changes(changes)).await?;

        tracing::info!(
            user_id = %updated.user_id,
            password_changed,
            "Profile updated"
        );

        Ok(updated)
    }

    fn validate(&self, input: UpdateProfileInput) -> AuthResult<UserChanges> {
        let first_name = input
            .first_name
            .map(|n| PersonName::new("first_name", n))
            .transpose()?;
        let last_name = input
            .last_name
            .map(|n| PersonName::new("last_name", n))
            .transpose()?;
        let plan = input.plan.map(validate_plan).transpose()?;

        let password_hash = match input.password {
            Some(raw) => {
                let raw = RawPassword::new(raw)?;
                Some(UserPassword::from_raw(&raw, &self.hasher)?)
            }
            None => None,
        };

        Ok(UserChanges {
            first_name,
            last_name,
            password_hash,
            plan,
            addons: input.addons,
            notification_prefs: input.notification_prefs,
        })
    }
}

fn validate_plan(plan: String) -> Result<String, AppError> {
    let plan = plan.trim().to_string();
    if plan.is_empty() || plan.chars().count() > PLAN_MAX_LENGTH {
        return Err(AppError::bad_request(format!(
            "plan must be 1 to {PLAN_MAX_LENGTH} characters"
        )));
    }
    Ok(plan)
}

/// Delete account use case
pub struct DeleteAccountUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteAccountUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Tokens issued earlier stop working at once: the guard re-reads the user.
    pub async fn execute(&self, current: &User) -> AuthResult<()> {
        self.repo.delete(&current.user_id).await?;

        tracing::info!(user_id = %current.user_id, "Account deleted");

        Ok(())
    }
}
