//! Password Hashing and Verification
//!
//! - Argon2id hashing with a fixed, tunable cost ([`HashCost`])
//! - Self-describing PHC output, so verification needs only the stored string
//! - Constant-time verification that never fails loudly: a broken hash is `false`
//! - A decoy verification path with the same cost, for "no such account" branches
//! - Zeroization of clear text passwords
//!
//! ## Policy
//! New passwords must be 8 to 128 characters long, use only ASCII letters,
//! digits and `!@#$%^&*()_+=-`, and contain at least one letter and one digit.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Upper bound keeps hashing cost bounded for hostile input
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Symbols accepted in addition to ASCII letters and digits
pub const ALLOWED_SYMBOLS: &str = "!@#$%^&*()_+=-";

/// Fixed input for the decoy hash
const DECOY_PASSWORD: &[u8] = b"decoy-password-never-issued-0";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violations, one per rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password may only contain letters, digits and {ALLOWED_SYMBOLS}")]
    InvalidCharacter,

    #[error("Password must contain at least one letter")]
    MissingLetter,

    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Hashing failures (infrastructure, not user input)
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Invalid hash cost parameters: {0}")]
    InvalidCost(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password, wiped from memory on drop
///
/// Not `Clone`, and `Debug` output is redacted.
///
/// ```rust
/// use platform::password::{ClearTextPassword, PasswordPolicyError};
///
/// assert!(ClearTextPassword::new("abcd1234".to_string()).is_ok());
/// assert_eq!(
///     ClearTextPassword::new("abcdefgh".to_string()).unwrap_err(),
///     PasswordPolicyError::MissingDigit,
/// );
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Accept a new password if it satisfies the policy
    ///
    /// Rules are checked in order: allowed characters, minimum length,
    /// maximum length, letter present, digit present.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ALLOWED_SYMBOLS.contains(c))
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        // All accepted characters are ASCII, so bytes == characters here.
        let len = raw.len();
        if len < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: len,
            });
        }
        if len > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: len,
            });
        }

        if !raw.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(PasswordPolicyError::MissingLetter);
        }
        if !raw.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }

        Ok(Self(raw))
    }

    /// Wrap a candidate password for verification only
    ///
    /// Login attempts must not be rejected by the policy: that would tell
    /// the caller something about the stored password.
    pub fn for_verification(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Stored password hash in PHC string format
///
/// Not validated on construction: a corrupt value simply never verifies.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a PHC string read from storage
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hash Cost
// ============================================================================

/// Argon2id work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory in KiB
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl HashCost {
    /// OWASP Argon2id baseline (m=19 MiB, t=2, p=1), comparable in work to bcrypt cost 12
    pub const DEFAULT: HashCost = HashCost {
        memory_kib: 19_456,
        iterations: 2,
        parallelism: 1,
    };

    fn params(&self) -> Result<Params, PasswordHashError> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidCost(e.to_string()))
    }
}

impl Default for HashCost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// Password Hasher
// ============================================================================

/// Salted one-way hashing with constant-time verification
///
/// ```rust
/// use platform::password::{ClearTextPassword, HashCost, PasswordHasher};
///
/// let hasher = PasswordHasher::new(HashCost::DEFAULT)?;
/// let password = ClearTextPassword::new("abcd1234".to_string())?;
/// let hashed = hasher.hash(&password)?;
/// assert!(hasher.verify(&password, &hashed));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    decoy: HashedPassword,
}

impl PasswordHasher {
    /// Build a hasher with the given cost
    ///
    /// Also hashes the decoy password once, at the same cost, so that
    /// [`PasswordHasher::verify_decoy`] is as slow as a real verification.
    pub fn new(cost: HashCost) -> Result<Self, PasswordHashError> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, cost.params()?);
        let decoy = hash_bytes(&argon2, DECOY_PASSWORD)?;
        Ok(Self { argon2, decoy })
    }

    /// Hash with a fresh random salt
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        hash_bytes(&self.argon2, password.as_bytes())
    }

    /// Check a password against a stored hash
    ///
    /// The cost and salt come from the PHC string itself. Any parse or
    /// verification problem yields `false`.
    pub fn verify(&self, password: &ClearTextPassword, hashed: &HashedPassword) -> bool {
        let parsed_hash = match PasswordHash::new(hashed.as_phc_string()) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Argon2 compares the output in constant time
        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Spend one verification's worth of work and report failure
    pub fn verify_decoy(&self, password: &ClearTextPassword) -> bool {
        let _ = self.verify(password, &self.decoy);
        false
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

fn hash_bytes(argon2: &Argon2<'_>, password: &[u8]) -> Result<HashedPassword, PasswordHashError> {
    // 128-bit random salt
    let salt = SaltString::generate(OsRng);

    let hash = argon2
        .hash_password(password, &salt)
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

    Ok(HashedPassword {
        hash: hash.to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
