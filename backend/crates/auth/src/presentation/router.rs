//! Auth Routers
//!
//! Both routers are meant to be nested under `/api`.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_access_token;

/// Public routes: `/auth/register`, `/auth/login`
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/auth/register", post(handlers::register::<R>))
        .route("/auth/login", post(handlers::login::<R>))
        .with_state(state)
}

/// Bearer-protected routes: `/users/me` and the admin listing `/users`
pub fn users_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/users/me",
            get(handlers::get_me)
                .put(handlers::update_me::<R>)
                .delete(handlers::delete_me::<R>),
        )
        .route("/users", get(handlers::list_users::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_access_token::<R>,
        ))
        .with_state(state)
}
