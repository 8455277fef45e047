//! Shared Kernel
//!
//! Vocabulary shared by every backend crate:
//! - [`error::app_error::AppError`], the client-facing error, and its [`error::kind::ErrorKind`]
//! - Typed identifiers ([`id::Id`])
//!
//! Nothing in here knows about accounts, tokens or billing.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
