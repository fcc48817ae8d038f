//! Admin API request / response types.
//!
//! Timestamps are millisecond Unix epochs, as stored by the hosted
//! database.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ── Login ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

// ── Users ─────────────────────────────────────────────────────────────────────

/// A user row in the panel listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserData {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<i64>,
}

/// The expanded single-user view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDetails {
    pub id: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: i64,
    pub last_login: Option<i64>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersListResponse {
    pub total: usize,
    pub users: Vec<UserData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    /// An empty string clears the stored phone number.
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

// ── Chats & queries ───────────────────────────────────────────────────────────

/// A full chat exchange as stored for one user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRecord {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    pub message: String,
    pub response: String,
    pub category: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserChatsResponse {
    pub total: usize,
    pub chats: Vec<ChatRecord>,
}

/// A query row in the cross-user listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatQuery {
    pub user_id: String,
    pub query: String,
    pub timestamp: i64,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueriesListResponse {
    pub total: usize,
    pub queries: Vec<ChatQuery>,
}

// ── Dashboard ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_queries: usize,
    pub active_users_today: usize,
    pub queries_today: usize,
    pub top_categories: Vec<CategoryCount>,
    pub last_updated: String,
}

// ── Generic action result ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}
