//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Query, State};
use axum::http::{StatusCode, Uri};
use std::sync::Arc;

use platform::password::{PasswordHashError, PasswordHasher};

use crate::application::admin_policy::AdminPolicy;
use crate::application::config::AuthConfig;
use crate::application::token::TokenIssuer;
use crate::application::{
    DeleteAccountUseCase, ListUsersUseCase, SignInInput, SignInUseCase, SignUpInput,
    SignUpUseCase, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::extract::JsonBody;
use crate::presentation::dto::{
    ListUsersQuery, LoginRequest, PaginatedUsersResponse, RegisterRequest, TokenResponse,
    UpdateProfileRequest, UserResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers and the access middleware
///
/// Everything except the repository is immutable after start-up.
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub hasher: Arc<PasswordHasher>,
    pub tokens: Arc<TokenIssuer>,
    pub admin: Arc<AdminPolicy>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    /// Build the hasher, token issuer and admin policy from `config`
    pub fn new(repo: R, config: AuthConfig) -> Result<Self, PasswordHashError> {
        let hasher = PasswordHasher::new(config.hash_cost)?;
        let tokens = TokenIssuer::new(config.token_secret.clone(), config.token_ttl);
        let admin = AdminPolicy::new(config.admin_emails.clone());

        Ok(Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            hasher: Arc::new(hasher),
            tokens: Arc::new(tokens),
            admin: Arc::new(admin),
        })
    }
}

// ============================================================================
// Register / Login
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.hasher.clone());

    let input = SignUpInput {
        email: req.email,
        first_name: req.first_name,
        last_name: req.last_name,
        password: req.password,
    };

    let user = use_case.execute(input).await?;

    Ok(Json(user.into()))
}

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.hasher.clone(),
        state.tokens.clone(),
    );

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(output.into()))
}

// ============================================================================
// Current User (requires access token)
// ============================================================================

/// GET /api/users/me
pub async fn get_me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(user.into())
}

/// PUT /api/users/me
pub async fn update_me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    JsonBody(req): JsonBody<UpdateProfileRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone(), state.hasher.clone());

    let input = UpdateProfileInput {
        first_name: req.first_name,
        last_name: req.last_name,
        password: req.password,
        plan: req.plan,
        addons: req.addons,
        notification_prefs: req.notification_prefs,
    };

    let updated = use_case.execute(&user, input).await?;

    Ok(Json(updated.into()))
}

/// DELETE /api/users/me
pub async fn delete_me<R>(
    State(state): State<AuthAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    DeleteAccountUseCase::new(state.repo.clone())
        .execute(&user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/users?skip=&limit=
///
/// The query string is parsed only after the admin check.
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    uri: Uri,
) -> AuthResult<Json<PaginatedUsersResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    state.admin.require_admin(&user)?;
    let Query(query) = Query::<ListUsersQuery>::try_from_uri(&uri)?;

    let use_case = ListUsersUseCase::new(state.repo.clone(), state.admin.clone());

    let output = use_case.execute(&user, query.skip, query.limit).await?;

    Ok(Json(output.into()))
}
