//! Admin login and token minting.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use sha2::{Digest, Sha256};
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::admin::{AdminLoginRequest, AdminLoginResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(admin_login),
    components(schemas(AdminLoginRequest, AdminLoginResponse))
)]
pub struct LoginApi;

/// Verify the configured admin login pair and mint a token
/// (`POST /api/v1/admin/login`).
#[utoipa::path(
    post,
    path = "/api/v1/admin/login",
    tag = "admin",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponse),
        (status = 401, description = "Invalid admin credentials"),
    )
)]
pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, ServerError> {
    if req.email != state.config.admin_email || req.password != state.config.admin_password {
        return Err(ServerError::Unauthorized(
            "Invalid admin credentials".to_owned(),
        ));
    }

    Ok(Json(AdminLoginResponse {
        success: true,
        message: "Admin login successful".to_owned(),
        token: Some(mint_token(&req.email)),
    }))
}

/// sha256 hex over `email:unix_time`: 64 characters, no expiry, no
/// revocation. The shape is the entire contract the token check relies on.
fn mint_token(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}", email, Utc::now().timestamp()).as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use crate::middleware::auth::TOKEN_LEN;

    #[test]
    fn minted_token_is_hash_shaped() {
        let token = mint_token("admin@legally.com");
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tokens_differ_across_emails() {
        assert_ne!(mint_token("a@x.com"), mint_token("b@x.com"));
    }
}
