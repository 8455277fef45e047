//! Entity Module

pub mod user;

pub use user::{NotificationPrefs, User, UserChanges};
