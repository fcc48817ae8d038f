//! Admin token check.
//!
//! The token is the sha256 hex minted at login, passed as a `?token=`
//! query parameter and validated only by its 64-character shape: there is
//! no signature, no expiry, and no revocation. A placeholder, not a
//! security boundary.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub const TOKEN_LEN: usize = 64;

pub async fn require_admin_token(req: Request<Body>, next: Next) -> Response {
    match req.uri().query().and_then(token_from_query) {
        Some(token) if token.len() == TOKEN_LEN => next.run(req).await,
        Some(_) => unauthorised("Invalid token"),
        None => unauthorised("No token provided"),
    }
}

fn unauthorised(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

fn token_from_query(query: &str) -> Option<String> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .map(str::to_owned)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn token_is_extracted_from_query() {
        assert_eq!(
            token_from_query("limit=10&token=abc&offset=0").as_deref(),
            Some("abc")
        );
        assert_eq!(token_from_query("limit=10"), None);
    }

    #[test]
    fn only_hash_shaped_tokens_pass() {
        let valid = "a".repeat(TOKEN_LEN);
        let short = "a".repeat(TOKEN_LEN - 1);
        assert_eq!(valid.len(), 64);
        assert_ne!(short.len(), TOKEN_LEN);
    }
}
