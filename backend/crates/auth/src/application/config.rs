//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at start-up and
//! shared read-only; nothing below this layer reads the environment.

use std::fmt;
use std::time::Duration;

use platform::config::{self as env, ConfigError};
use platform::password::HashCost;

use crate::application::admin_policy::AdminAllowList;

pub const DEFAULT_TOKEN_TTL_MINUTES: u64 = 15;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing key for access tokens
    pub token_secret: Vec<u8>,
    /// Access token lifetime
    pub token_ttl: Duration,
    /// Emails allowed to use admin operations
    pub admin_emails: AdminAllowList,
    /// Argon2id work factor for new hashes
    pub hash_cost: HashCost,
}

impl AuthConfig {
    /// Config with defaults for everything but the secret
    pub fn new(token_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: token_secret.into(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_MINUTES * 60),
            admin_emails: AdminAllowList::default(),
            hash_cost: HashCost::DEFAULT,
        }
    }

    /// Load from the process environment
    ///
    /// - `JWT_SECRET` (required)
    /// - `JWT_EXPIRE_MINUTES` (default 15, must be positive)
    /// - `ADMIN_EMAILS` (comma-separated, default empty)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env::process_env)
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = env::required(lookup, "JWT_SECRET")?;

        let minutes: u64 = env::parse_or(lookup, "JWT_EXPIRE_MINUTES", DEFAULT_TOKEN_TTL_MINUTES)?;
        if minutes == 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRE_MINUTES".to_string(),
                reason: "must be a positive number of minutes".to_string(),
            });
        }
        // Token timestamps are signed Unix seconds
        let ttl_secs = minutes
            .checked_mul(60)
            .filter(|secs| i64::try_from(*secs).is_ok())
            .ok_or_else(|| ConfigError::Invalid {
                key: "JWT_EXPIRE_MINUTES".to_string(),
                reason: "too large".to_string(),
            })?;

        let admin_emails = env::optional(lookup, "ADMIN_EMAILS")
            .map(|raw| AdminAllowList::parse(&raw))
            .unwrap_or_default();

        Ok(Self {
            token_ttl: Duration::from_secs(ttl_secs),
            admin_emails,
            ..Self::new(secret.into_bytes())
        })
    }

    pub fn with_admin_emails(mut self, admin_emails: AdminAllowList) -> Self {
        self.admin_emails = admin_emails;
        self
    }

    pub fn with_hash_cost(mut self, hash_cost: HashCost) -> Self {
        self.hash_cost = hash_cost;
        self
    }

    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("admin_emails", &self.admin_emails)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AuthConfig::from_lookup(&lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();

        assert_eq!(config.token_secret, b"s3cret".to_vec());
        assert_eq!(config.token_ttl, Duration::from_secs(15 * 60));
        assert!(config.admin_emails.is_empty());
        assert_eq!(config.hash_cost, HashCost::DEFAULT);
    }

    #[test]
    fn test_secret_is_required() {
        let result = AuthConfig::from_lookup(&lookup_from(&[("JWT_EXPIRE_MINUTES", "5")]));
        assert_eq!(
            result.unwrap_err(),
            ConfigError::Missing("JWT_SECRET".to_string())
        );
    }

    #[test]
    fn test_expiry_must_be_positive() {
        let lookup = lookup_from(&[("JWT_SECRET", "s"), ("JWT_EXPIRE_MINUTES", "0")]);
        assert!(matches!(
            AuthConfig::from_lookup(&lookup),
            Err(ConfigError::Invalid { .. })
        ));

        let lookup = lookup_from(&[("JWT_SECRET", "s"), ("JWT_EXPIRE_MINUTES", "-5")]);
        assert!(AuthConfig::from_lookup(&lookup).is_err());
    }

    #[test]
    fn test_expiry_overflow_is_rejected() {
        for minutes in ["18446744073709551615", "200000000000000000"] {
            let lookup = lookup_from(&[("JWT_SECRET", "s"), ("JWT_EXPIRE_MINUTES", minutes)]);
            assert!(
                matches!(
                    AuthConfig::from_lookup(&lookup),
                    Err(ConfigError::Invalid { .. })
                ),
                "{minutes}"
            );
        }
    }

    #[test]
    fn test_admin_emails_parsed() {
        let lookup = lookup_from(&[
            ("JWT_SECRET", "s"),
            ("JWT_EXPIRE_MINUTES", "60"),
            ("ADMIN_EMAILS", " Root@Example.com, ,ops@example.com "),
        ]);
        let config = AuthConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.token_ttl, Duration::from_secs(3600));
        assert!(config.admin_emails.contains("root@example.com"));
        assert!(config.admin_emails.contains("ops@example.com"));
        assert_eq!(config.admin_emails.len(), 2);
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = AuthConfig::new("super-secret-key");
        assert!(!format!("{:?}", config).contains("super-secret-key"));
    }
}
