//! The legal-advice endpoint.
//!
//! Validation happens before anything touches the network: an empty or
//! whitespace-only message is rejected with 400 and no upstream call is
//! issued. Model selection, fallback, and thread bookkeeping live in
//! `legally-inference`.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::schemas::advice::{LegalAdviceRequest, LegalAdviceResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(legal_advice),
    components(schemas(LegalAdviceRequest, LegalAdviceResponse))
)]
pub struct AdviceApi;

/// Register the legal-advice route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/legal-advice", post(legal_advice))
}

/// Generate a legal analysis for a free-text question
/// (`POST /api/legal-advice`).
///
/// With a `thread_id`, prior turns of that thread are sent as context and
/// the new exchange is recorded on success.
#[utoipa::path(
    post,
    path = "/api/legal-advice",
    tag = "advice",
    request_body = LegalAdviceRequest,
    responses(
        (status = 200, description = "Analysis generated", body = LegalAdviceResponse),
        (status = 400, description = "Empty message"),
        (status = 500, description = "All models failed"),
        (status = 503, description = "Inference credential missing"),
    )
)]
pub async fn legal_advice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LegalAdviceRequest>,
) -> Result<Json<LegalAdviceResponse>, ServerError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(ServerError::BadRequest("Message cannot be empty".into()));
    }

    let advisor = state.advisor()?;

    info!(
        chars = message.len(),
        thread_id = ?req.thread_id,
        "processing legal advice request"
    );

    let answer = advisor.answer(message, req.thread_id.as_deref()).await?;

    info!(model = %answer.model_id, chars = answer.text.len(), "advice generated");

    Ok(Json(LegalAdviceResponse { response: answer.text }))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    #[test]
    fn whitespace_only_messages_are_empty() {
        for message in ["", "   ", "\n\t ", "  \r\n"] {
            assert!(message.trim().is_empty());
        }
    }

    #[test]
    fn padded_messages_survive_trimming() {
        assert_eq!("  what is theft?  ".trim(), "what is theft?");
    }
}
