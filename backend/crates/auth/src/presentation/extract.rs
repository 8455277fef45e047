//! Request extractors whose rejections render as `AuthError`

use axum::extract::FromRequest;

/// `axum::Json` with malformed bodies reported as validation errors
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(crate::error::AuthError))]
pub struct JsonBody<T>(pub T);
