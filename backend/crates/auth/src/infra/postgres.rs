//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::user::{NotificationPrefs, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    UserId, email::Email, page::PageRequest, person_name::PersonName,
    user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// Unique index on `lower(email)`
const EMAIL_UNIQUE_INDEX: &str = "users_email_lower_key";

const USER_COLUMNS: &str = r#"
    user_id,
    email,
    first_name,
    last_name,
    password_hash,
    plan,
    addons,
    notification_prefs,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn insert(&self, user: &User) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (
                user_id,
                email,
                first_name,
                last_name,
                password_hash,
                plan,
                addons,
                notification_prefs,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.password_hash.as_str())
        .bind(&user.plan)
        .bind(&user.addons)
        .bind(Json(&user.notification_prefs))
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(row.into_user())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE user_id = $1"
        ))
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE lower(email) = lower($1)"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn update(&self, user: &User) -> AuthResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users SET
                first_name = $2,
                last_name = $3,
                password_hash = $4,
                plan = $5,
                addons = $6,
                notification_prefs = $7,
                updated_at = $8
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.user_id.as_uuid())
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.password_hash.as_str())
        .bind(&user.plan)
        .bind(&user.addons)
        .bind(Json(&user.notification_prefs))
        .bind(user.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).ok_or(AuthError::UserNotFound)
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> AuthResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn list_page(&self, page: PageRequest) -> AuthResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            ORDER BY created_at DESC, user_id
            OFFSET $1
            LIMIT $2
            "#
        ))
        .bind(page.skip())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }
}

/// Map a unique-index hit on the email to `DuplicateEmail`
fn map_unique_violation(err: sqlx::Error) -> AuthError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
        && db_err.constraint() == Some(EMAIL_UNIQUE_INDEX)
    {
        return AuthError::DuplicateEmail;
    }
    AuthError::Database(err)
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    plan: String,
    addons: Vec<String>,
    notification_prefs: Json<NotificationPrefs>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::from_db(self.email),
            first_name: PersonName::from_db(self.first_name),
            last_name: PersonName::from_db(self.last_name),
            password_hash: UserPassword::from_db(self.password_hash),
            plan: self.plan,
            addons: self.addons,
            notification_prefs: self.notification_prefs.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
