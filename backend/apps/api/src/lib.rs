//! API process bootstrap
//!
//! Start-up pieces shared by the `api` server and the `seed` command.
//! Uses `anyhow` for start-up errors; request errors use
//! `kernel::error::AppError` and the crate error types.

pub mod bootstrap;
