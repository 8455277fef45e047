//! Admin seeding command
//!
//! Creates an account for every `ADMIN_EMAILS` entry that has none, using
//! `ADMIN_SEED_PASSWORD` (default `Admin1234`). Safe to run repeatedly.

use api::bootstrap::{ServerConfig, connect_database, init_tracing};
use auth::application::SeedAdminsUseCase;
use auth::application::seed_admins::DEFAULT_SEED_PASSWORD;
use auth::{AuthConfig, PgUserRepository};
use platform::password::PasswordHasher;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let server_config = ServerConfig::from_env()?;
    let auth_config = AuthConfig::from_env()?;

    if auth_config.admin_emails.is_empty() {
        tracing::info!("No ADMIN_EMAILS provided; skipping seeding");
        return Ok(());
    }

    let password = platform::config::optional(&platform::config::process_env, "ADMIN_SEED_PASSWORD")
        .unwrap_or_else(|| DEFAULT_SEED_PASSWORD.to_string());

    let pool = connect_database(&server_config.database_url).await?;
    let repo = Arc::new(PgUserRepository::new(pool));
    let hasher = Arc::new(PasswordHasher::new(auth_config.hash_cost)?);

    let seeded = SeedAdminsUseCase::new(repo, hasher)
        .execute(&auth_config.admin_emails, password)
        .await
        .map_err(|e| anyhow::anyhow!("Admin seeding failed: {e}"))?;

    if seeded.is_empty() {
        tracing::info!("All admin accounts already exist");
    } else {
        tracing::info!(emails = %seeded.join(", "), "Seeded admin users");
    }

    Ok(())
}
