//! Billing HTTP layer

use axum::extract::Extension;
use axum::{Json, Router, middleware, routing::get};

use auth::domain::repository::UserRepository;
use auth::{AuthAppState, CurrentUser, require_access_token};

use crate::domain::{Invoice, sample_invoices};

/// GET /api/billing/invoices
pub async fn list_invoices(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<Vec<Invoice>> {
    tracing::debug!(user_id = %user.user_id, "Invoices listed");
    Json(sample_invoices())
}

/// Bearer-protected billing routes, meant to be nested under `/api`
pub fn billing_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/billing/invoices", get(list_invoices))
        .route_layer(middleware::from_fn_with_state(
            state,
            require_access_token::<R>,
        ))
}
