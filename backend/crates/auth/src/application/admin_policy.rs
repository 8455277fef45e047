//! Admin Policy
//!
//! Flat allow-list authorization: a user is an admin when their email is
//! listed in `ADMIN_EMAILS`. There are no roles beyond that.

use std::collections::BTreeSet;

use crate::domain::entity::user::User;
use crate::error::{AuthError, AuthResult};

/// Lowercased admin emails, fixed at start-up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminAllowList(BTreeSet<String>);

impl AdminAllowList {
    /// Parse a comma-separated list
    ///
    /// Entries are trimmed and lowercased; empty entries are dropped.
    pub fn parse(raw: &str) -> Self {
        Self::from_iter(raw.split(','))
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.contains(&email.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for AdminAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        )
    }
}

/// Admin check over an allow-list
#[derive(Debug, Clone)]
pub struct AdminPolicy {
    allow_list: AdminAllowList,
}

impl AdminPolicy {
    pub fn new(allow_list: AdminAllowList) -> Self {
        Self { allow_list }
    }

    pub fn is_admin(&self, user: &User) -> bool {
        self.allow_list.contains(user.email.as_str())
    }

    /// `Err(AuthError::Forbidden)` unless `user` is an admin
    pub fn require_admin(&self, user: &User) -> AuthResult<()> {
        if self.is_admin(user) {
            Ok(())
        } else {
            tracing::debug!(user_id = %user.user_id, "Admin check failed");
            Err(AuthError::Forbidden)
        }
    }
}
