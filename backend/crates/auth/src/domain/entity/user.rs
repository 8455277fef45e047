//! User Entity
//!
//! Account record: login credentials plus profile and subscription data.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::value_object::{
    UserId, email::Email, person_name::PersonName, user_password::UserPassword,
};

/// Plan assigned to new accounts
pub const DEFAULT_PLAN: &str = "Free";

/// Notification preferences: a free-form JSON object
pub type NotificationPrefs = Map<String, Value>;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier (token subject)
    pub user_id: UserId,
    /// Login email, lowercased
    pub email: Email,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Argon2id PHC string; never serialized to clients
    pub password_hash: UserPassword,
    pub plan: String,
    pub addons: Vec<String>,
    pub notification_prefs: NotificationPrefs,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Requested profile changes; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub first_name: Option<PersonName>,
    pub last_name: Option<PersonName>,
    pub password_hash: Option<UserPassword>,
    pub plan: Option<String>,
    pub addons: Option<Vec<String>>,
    pub notification_prefs: Option<NotificationPrefs>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.password_hash.is_none()
            && self.plan.is_none()
            && self.addons.is_none()
            && self.notification_prefs.is_none()
    }
}

impl User {
    /// Create a new user on the default plan
    pub fn new(
        email: Email,
        first_name: PersonName,
        last_name: PersonName,
        password_hash: UserPassword,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            first_name,
            last_name,
            password_hash,
            plan: DEFAULT_PLAN.to_string(),
            addons: Vec::new(),
            notification_prefs: Map::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// New record value with `changes` applied and `updated_at` bumped
    ///
    /// Identity, email and creation time never change.
    pub fn with_changes(&self, changes: UserChanges) -> Self {
        let now = Utc::now().max(self.updated_at);

        Self {
            user_id: self.user_id,
            email: self.email.clone(),
            first_name: changes.first_name.unwrap_or_else(|| self.first_name.clone()),
            last_name: changes.last_name.unwrap_or_else(|| self.last_name.clone()),
            password_hash: changes
                .password_hash
                .unwrap_or_else(|| self.password_hash.clone()),
            plan: changes.plan.unwrap_or_else(|| self.plan.clone()),
            addons: changes.addons.unwrap_or_else(|| self.addons.clone()),
            notification_prefs: changes
                .notification_prefs
                .unwrap_or_else(|| self.notification_prefs.clone()),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}
