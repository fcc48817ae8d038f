//! Service-info and liveness routes.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(service_info, ping))]
pub struct RootApi;

/// Register the root and ping routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(service_info))
        .route("/api/ping", get(ping))
}

/// API information page (`GET /`).
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Service description", body = Value))
)]
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "name": "Legal AI Admin API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "legal_advice": "POST /api/legal-advice",
            "browse_laws": "GET /api/browse/laws",
            "health": "GET /api/v1/admin/health",
            "login": "POST /api/v1/admin/login",
            "dashboard": "GET /api/v1/admin/dashboard",
            "users": "GET /api/v1/admin/users",
            "queries": "GET /api/v1/admin/queries",
            "queries_by_category": "GET /api/v1/admin/queries/category/{category}",
            "set_admin_role": "POST /api/v1/admin/set-admin-role/{user_id}",
            "delete_user": "DELETE /api/v1/admin/users/{user_id}"
        },
        "docs": "/swagger-ui",
    }))
}

/// Liveness ping (`GET /api/ping`).
#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "root",
    responses((status = 200, description = "Pong", body = Value))
)]
pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn service_info_reports_running() {
        let Json(body) = service_info().await;
        assert_eq!(body["status"], "running");
        assert!(!body["version"].as_str().unwrap_or("").is_empty());
    }

    #[tokio::test]
    async fn ping_pongs() {
        let Json(body) = ping().await;
        assert_eq!(body["message"], "pong");
    }
}
