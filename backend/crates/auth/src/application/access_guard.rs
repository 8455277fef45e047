//! Access Guard
//!
//! Per-request gate: bearer token → validated subject → parsed id → live user.
//! Every failure is `AuthError::Unauthenticated`; the [`DenialReason`] is for
//! logs only.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use derive_more::Display;

use crate::application::token::{TokenError, TokenIssuer};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Internal cause of a denied request
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    #[display("missing credentials")]
    MissingCredentials,
    #[display("expired token")]
    ExpiredToken,
    #[display("malformed token")]
    MalformedToken,
    #[display("invalid subject")]
    InvalidSubject,
    #[display("unknown subject")]
    UnknownSubject,
}

impl From<TokenError> for DenialReason {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => DenialReason::ExpiredToken,
            TokenError::Malformed => DenialReason::MalformedToken,
        }
    }
}

/// Resolves a bearer token to the current user record
pub struct AccessGuard<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenIssuer>,
}

impl<R> AccessGuard<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenIssuer>) -> Self {
        Self { repo, tokens }
    }

    pub async fn resolve(&self, bearer: Option<&str>) -> AuthResult<User> {
        self.resolve_at(bearer, Utc::now()).await
    }

    /// Resolve as if the current time were `now`
    ///
    /// One store read on success, none on token failures. Store errors
    /// propagate as-is.
    pub async fn resolve_at(&self, bearer: Option<&str>, now: DateTime<Utc>) -> AuthResult<User> {
        let token = bearer.ok_or(AuthError::Unauthenticated(DenialReason::MissingCredentials))?;

        let subject = self
            .tokens
            .validate_at(token, now)
            .map_err(|e| AuthError::Unauthenticated(e.into()))?;

        let user_id: UserId = subject
            .parse()
            .map_err(|_| AuthError::Unauthenticated(DenialReason::InvalidSubject))?;

        self.repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::Unauthenticated(DenialReason::UnknownSubject))
    }
}
