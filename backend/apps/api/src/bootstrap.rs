//! Tracing, configuration and database setup

use platform::config::{self as env, ConfigError};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILTER: &str = "api=info,auth=info,billing=info,tower_http=info";
pub const DEFAULT_WEB_ORIGIN: &str = "http://localhost:5173";
pub const DEFAULT_API_PORT: u16 = 8000;

/// Install the global subscriber; `RUST_LOG` overrides the default filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Server settings outside the auth layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub web_origin: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env::process_env)
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env::required(lookup, "DATABASE_URL")?,
            web_origin: env::optional(lookup, "WEB_ORIGIN")
                .unwrap_or_else(|| DEFAULT_WEB_ORIGIN.to_string()),
            port: env::parse_or(lookup, "API_PORT", DEFAULT_API_PORT)?,
        })
    }
}

/// Connect to Postgres and apply pending migrations
pub async fn connect_database(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let lookup = |key: &str| (key == "DATABASE_URL").then(|| "postgres://db/app".to_string());
        let config = ServerConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.database_url, "postgres://db/app");
        assert_eq!(config.web_origin, "http://localhost:5173");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_server_config_requires_database_url() {
        let lookup = |_: &str| -> Option<String> { None };
        assert_eq!(
            ServerConfig::from_lookup(&lookup),
            Err(ConfigError::Missing("DATABASE_URL".to_string()))
        );
    }

    #[test]
    fn test_server_config_bad_port() {
        let lookup = |key: &str| match key {
            "DATABASE_URL" => Some("postgres://db/app".to_string()),
            "API_PORT" => Some("eighty".to_string()),
            _ => None,
        };
        assert!(matches!(
            ServerConfig::from_lookup(&lookup),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
