//! User management endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, OpenApi};

use crate::error::ServerError;
use crate::schemas::admin::{
    ActionResponse, UpdateUserRequest, UserChatsResponse, UserData, UserDetails,
    UsersListResponse,
};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_users, user_details, user_chats, update_user, delete_user, set_admin_role),
    components(schemas(
        UsersListResponse,
        UserData,
        UserDetails,
        UserChatsResponse,
        UpdateUserRequest,
        ActionResponse
    ))
)]
pub struct UsersApi;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ChatsParams {
    pub limit: Option<usize>,
}

/// List users (`GET /api/v1/admin/users?limit=&offset=`).
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = "admin",
    params(ListParams),
    responses(
        (status = 200, description = "Paged user list", body = UsersListResponse),
        (status = 401, description = "Unauthorised (admin token required)"),
        (status = 503, description = "Firebase not initialized"),
    )
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<UsersListResponse>, ServerError> {
    let (total, users) = state
        .firebase()?
        .list_users(params.limit.unwrap_or(50), params.offset.unwrap_or(0))
        .await?;
    Ok(Json(UsersListResponse { total, users }))
}

/// Individual user details (`GET /api/v1/admin/users/{id}`).
#[utoipa::path(
    get,
    path = "/api/v1/admin/users/{id}",
    tag = "admin",
    responses(
        (status = 200, description = "User details", body = UserDetails),
        (status = 401, description = "Unauthorised (admin token required)"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn user_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<UserDetails>, ServerError> {
    let details = state
        .firebase()?
        .get_user(&id)
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_owned()))?;
    Ok(Json(details))
}

/// One user's chat history, newest first
/// (`GET /api/v1/admin/users/{id}/chats?limit=`).
#[utoipa::path(
    get,
    path = "/api/v1/admin/users/{id}/chats",
    tag = "admin",
    params(ChatsParams),
    responses(
        (status = 200, description = "Chat history", body = UserChatsResponse),
        (status = 401, description = "Unauthorised (admin token required)"),
    )
)]
pub async fn user_chats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ChatsParams>,
) -> Result<Json<UserChatsResponse>, ServerError> {
    let (total, chats) = state
        .firebase()?
        .user_chats(&id, params.limit.unwrap_or(100))
        .await?;
    Ok(Json(UserChatsResponse { total, chats }))
}

/// Update a user in both stores (`PUT /api/v1/admin/users/{id}`).
///
/// Best-effort on the auth-provider side; the success response only
/// guarantees the database write.
#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}",
    tag = "admin",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ActionResponse),
        (status = 401, description = "Unauthorised (admin token required)"),
    )
)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ActionResponse>, ServerError> {
    info!(user_id = %id, "updating user");
    state.firebase()?.update_user(&id, &req).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "User updated successfully".to_owned(),
    }))
}

/// Delete a user completely: auth account plus all stored data
/// (`DELETE /api/v1/admin/users/{id}`).
#[utoipa::path(
    delete,
    path = "/api/v1/admin/users/{id}",
    tag = "admin",
    responses(
        (status = 200, description = "User and data deleted", body = ActionResponse),
        (status = 401, description = "Unauthorised (admin token required)"),
        (status = 503, description = "Auth provider not configured"),
    )
)]
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, ServerError> {
    state.firebase()?.delete_user(&id).await?;
    info!(user_id = %id, "user deleted");
    Ok(Json(ActionResponse {
        success: true,
        message: format!("User {id} and all associated data deleted successfully"),
    }))
}

/// Grant the admin role claim (`POST /api/v1/admin/set-admin-role/{id}`).
#[utoipa::path(
    post,
    path = "/api/v1/admin/set-admin-role/{id}",
    tag = "admin",
    responses(
        (status = 200, description = "Role granted", body = ActionResponse),
        (status = 401, description = "Unauthorised (admin token required)"),
        (status = 503, description = "Auth provider not configured"),
    )
)]
pub async fn set_admin_role(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, ServerError> {
    state.firebase()?.set_admin_role(&id).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: format!("User {id} set as admin"),
    }))
}
