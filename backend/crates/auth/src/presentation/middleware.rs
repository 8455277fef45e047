//! Auth Middleware
//!
//! Bearer-token gate for protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::client::extract_bearer_token;

use crate::application::access_guard::AccessGuard;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Authenticated user, stored in request extensions by [`require_access_token`]
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a valid access token
///
/// Resolves the token to a live user and inserts it as [`CurrentUser`].
/// Denials become a 401 with `WWW-Authenticate: Bearer`.
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/billing/invoices", get(list_invoices))
///     .route_layer(middleware::from_fn_with_state(state, require_access_token::<R>));
/// ```
pub async fn require_access_token<R>(
    State(state): State<AuthAppState<R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let guard = AccessGuard::new(state.repo.clone(), state.tokens.clone());

    let bearer = extract_bearer_token(req.headers());
    let user = guard.resolve(bearer).await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
