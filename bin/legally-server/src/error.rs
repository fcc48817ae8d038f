//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a JSON-body HTTP response with an appropriate status code.
//!
//! Hosted-service failures are logged with full detail but only a generic
//! message is returned to the caller so that upstream URLs, credentials,
//! or payload fragments never leak to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::firebase::FirebaseError;
use legally_inference::AdviceError;

/// All errors that can occur in the legally-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The caller sent an invalid or malformed request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid credentials / admin token.
    #[error("unauthorised: {0}")]
    Unauthorized(String),

    /// The caller referenced a resource that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A required hosted-service credential is missing.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Every configured model failed to produce an answer.
    #[error(transparent)]
    Advice(#[from] AdviceError),

    /// Propagated from the hosted database / auth provider.
    #[error("gateway error: {0}")]
    Gateway(#[from] FirebaseError),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, client_message) = match &self {
            // Client-facing errors: expose the message directly.
            ServerError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            ServerError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m.clone()),
            ServerError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            ServerError::NotConfigured(m) => (StatusCode::SERVICE_UNAVAILABLE, m.clone()),

            // A missing auth-provider credential is a configuration gap,
            // not an upstream outage.
            ServerError::Gateway(FirebaseError::AuthNotConfigured) => (
                StatusCode::SERVICE_UNAVAILABLE,
                FirebaseError::AuthNotConfigured.to_string(),
            ),

            ServerError::Advice(e) => {
                error!(error = %e, "advice generation exhausted all models");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }

            // Internal errors: log the full detail, return a generic message.
            ServerError::Gateway(e) => {
                error!(error = %e, "hosted service error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": client_message }))).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(e: anyhow::Error) -> Self {
        // Log the full error chain before discarding it so diagnostic detail
        // is preserved in the server logs even though clients only see a
        // generic message.
        error!(error = ?e, "converting anyhow error to ServerError::Internal");
        ServerError::Internal(e.to_string())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        let cases = [
            (ServerError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ServerError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (ServerError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                ServerError::NotConfigured("x".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ServerError::Advice(AdviceError::Exhausted),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServerError::Gateway(FirebaseError::AuthNotConfigured),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ServerError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn internal_detail_is_not_echoed_to_clients() {
        let resp = ServerError::Internal("secret detail".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
