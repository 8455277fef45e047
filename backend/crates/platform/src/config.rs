//! Environment configuration helpers
//!
//! Readers take a lookup function instead of touching the process
//! environment directly, so configuration can be built from a map in tests.
//! Use [`process_env`] for the real environment.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: String, reason: String },
}

/// Lookup backed by `std::env::var`
///
/// Unset and non-unicode variables both read as absent.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read a variable that must be present and non-blank
pub fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, ConfigError> {
    optional(lookup, key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

/// Read a variable, treating blank values as unset
pub fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a variable, falling back to `default` when unset
pub fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(lookup, key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_required() {
        let lookup = lookup_from(&[("JWT_SECRET", "s3cret"), ("BLANK", "   ")]);

        assert_eq!(required(&lookup, "JWT_SECRET").unwrap(), "s3cret");
        assert_eq!(
            required(&lookup, "DATABASE_URL"),
            Err(ConfigError::Missing("DATABASE_URL".to_string()))
        );
        assert_eq!(
            required(&lookup, "BLANK"),
            Err(ConfigError::Missing("BLANK".to_string()))
        );
    }

    #[test]
    fn test_parse_or() {
        let lookup = lookup_from(&[("API_PORT", " 9000 "), ("BAD", "nine")]);

        assert_eq!(parse_or(&lookup, "API_PORT", 8000u16).unwrap(), 9000);
        assert_eq!(parse_or(&lookup, "MISSING", 8000u16).unwrap(), 8000);
        assert!(matches!(
            parse_or(&lookup, "BAD", 8000u16),
            Err(ConfigError::Invalid { key, .. }) if key == "BAD"
        ));
    }
}
