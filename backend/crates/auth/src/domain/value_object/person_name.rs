//! Person Name Value Object

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

pub const NAME_MAX_LENGTH: usize = 100;

/// First or last name: trimmed, 1 to 100 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// `field` names the input in error messages (e.g. `"first_name"`)
    pub fn new(field: &'static str, raw: impl Into<String>) -> AppResult<Self> {
        let name = raw.into().trim().to_string();
        let len = name.chars().count();

        if len == 0 {
            return Err(AppError::bad_request(format!("{field} cannot be empty")));
        }
        if len > NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "{field} must be at most {NAME_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(name))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
