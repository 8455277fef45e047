//! Sign In Use Case
//!
//! Authenticates a user and issues an access token.

use std::sync::Arc;

use platform::password::PasswordHasher;

use crate::application::authenticator::Authenticator;
use crate::application::token::TokenIssuer;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    authenticator: Authenticator<R>,
    tokens: Arc<TokenIssuer>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, hasher: Arc<PasswordHasher>, tokens: Arc<TokenIssuer>) -> Self {
        Self {
            authenticator: Authenticator::new(repo, hasher),
            tokens,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user = self
            .authenticator
            .authenticate(&input.email, input.password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let access_token = self.tokens.issue(&user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput {
            access_token,
            token_type: TOKEN_TYPE_BEARER,
        })
    }
}
