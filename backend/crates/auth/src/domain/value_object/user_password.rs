//! User Password Value Object
//!
//! Domain wrappers over `platform::password`:
//! - [`RawPassword`]: a new password that passed the policy
//! - [`UserPassword`]: the stored Argon2id hash
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//! use platform::password::{HashCost, PasswordHasher};
//!
//! let hasher = PasswordHasher::new(HashCost::DEFAULT)?;
//! let raw = RawPassword::new("abcd1234".to_string())?;
//! let hashed = UserPassword::from_raw(&raw, &hasher)?;
//! assert!(hashed.as_str().starts_with("$argon2id$"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordHasher, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// New password from user input, already checked against the policy
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a new password
    ///
    /// ## Errors
    /// `AppError` (400) naming the violated rule
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| {
            let message = e.to_string();
            match e {
                PasswordPolicyError::TooShort { .. } => AppError::bad_request(message)
                    .with_action("Please choose a longer password"),
                PasswordPolicyError::TooLong { .. } => AppError::bad_request(message)
                    .with_action("Please choose a shorter password"),
                PasswordPolicyError::InvalidCharacter => AppError::bad_request(message)
                    .with_action("Remove spaces and unsupported symbols"),
                PasswordPolicyError::MissingLetter => {
                    AppError::bad_request(message).with_action("Add a letter to your password")
                }
                PasswordPolicyError::MissingDigit => {
                    AppError::bad_request(message).with_action("Add a number to your password")
                }
            }
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password in PHC string format
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a validated password
    pub fn from_raw(raw: &RawPassword, hasher: &PasswordHasher) -> Result<Self, PasswordHashError> {
        hasher.hash(raw.inner()).map(Self)
    }

    /// Wrap a hash read from the database
    pub fn from_db(hash: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(hash))
    }

    /// Check a login attempt against this hash
    ///
    /// The candidate is not run through the policy.
    pub fn verify(&self, candidate: &ClearTextPassword, hasher: &PasswordHasher) -> bool {
        hasher.verify(candidate, &self.0)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}
