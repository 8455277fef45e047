//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire. Requests carrying passwords do
//! not implement `Debug`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::list_users::ListUsersOutput;
use crate::application::sign_in::SignInOutput;
use crate::domain::entity::user::{NotificationPrefs, User};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TokenResponse {
    pub access_token: String,
    /// Always `"bearer"`
    pub token_type: String,
}

impl From<SignInOutput> for TokenResponse {
    fn from(output: SignInOutput) -> Self {
        Self {
            access_token: output.access_token,
            token_type: output.token_type.to_string(),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Profile update request; omitted or null fields stay unchanged
#[derive(Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
    pub plan: Option<String>,
    pub addons: Option<Vec<String>>,
    pub notification_prefs: Option<NotificationPrefs>,
}

/// Public view of a user; the password hash is never included
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub plan: String,
    pub addons: Vec<String>,
    pub notification_prefs: NotificationPrefs,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            email: user.email.into_inner(),
            first_name: user.first_name.as_str().to_string(),
            last_name: user.last_name.as_str().to_string(),
            plan: user.plan,
            addons: user.addons,
            notification_prefs: user.notification_prefs,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Admin Listing
// ============================================================================

/// `GET /users` query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Paginated users response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedUsersResponse {
    pub total: i64,
    pub items: Vec<UserResponse>,
}

impl From<ListUsersOutput> for PaginatedUsersResponse {
    fn from(output: ListUsersOutput) -> Self {
        Self {
            total: output.total,
            items: output.items.into_iter().map(UserResponse::from).collect(),
        }
    }
}
