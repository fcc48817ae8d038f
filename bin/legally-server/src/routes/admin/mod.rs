//! Admin panel routes, nested under `/api/v1/admin`.
//!
//! `login` and `health` are open; everything else sits behind the admin
//! token check.

pub mod dashboard;
pub mod login;
pub mod queries;
pub mod users;

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::middleware::auth;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    let open = Router::new()
        .route("/login", post(login::admin_login))
        .route("/health", get(health_check));

    let protected = Router::new()
        .route("/dashboard", get(dashboard::dashboard_stats))
        .route("/users", get(users::list_users))
        .route(
            "/users/{id}",
            get(users::user_details)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{id}/chats", get(users::user_chats))
        .route("/queries", get(queries::list_queries))
        .route("/queries/category/{category}", get(queries::queries_by_category))
        .route("/set-admin-role/{id}", post(users::set_admin_role))
        .route_layer(middleware::from_fn(auth::require_admin_token));

    open.merge(protected)
}

/// Health check endpoint (`GET /api/v1/admin/health`).
#[utoipa::path(
    get,
    path = "/api/v1/admin/health",
    tag = "admin",
    responses((status = 200, description = "Service is healthy", body = Value))
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "service": "Legal AI Admin API",
    }))
}

#[derive(OpenApi)]
#[openapi(paths(health_check))]
pub struct AdminApi;

pub fn api_docs() -> utoipa::openapi::OpenApi {
    let mut spec = AdminApi::openapi();
    spec.merge(login::LoginApi::openapi());
    spec.merge(dashboard::DashboardApi::openapi());
    spec.merge(users::UsersApi::openapi());
    spec.merge(queries::QueriesApi::openapi());
    spec
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy() {
        let Json(body) = health_check().await;
        assert_eq!(body["status"], "healthy");
        assert!(!body["timestamp"].as_str().unwrap_or("").is_empty());
    }
}
