//! Dashboard aggregate.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::admin::{CategoryCount, DashboardStats};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(dashboard_stats),
    components(schemas(DashboardStats, CategoryCount))
)]
pub struct DashboardApi;

/// Dashboard statistics (`GET /api/v1/admin/dashboard`).
///
/// Recomputed per request by a full scan of both collections.
#[utoipa::path(
    get,
    path = "/api/v1/admin/dashboard",
    tag = "admin",
    responses(
        (status = 200, description = "Current statistics", body = DashboardStats),
        (status = 401, description = "Unauthorised (admin token required)"),
        (status = 503, description = "Firebase not initialized"),
    )
)]
pub async fn dashboard_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardStats>, ServerError> {
    let stats = state.firebase()?.dashboard_stats().await?;
    Ok(Json(stats))
}
