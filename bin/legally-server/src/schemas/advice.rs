use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/legal-advice`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LegalAdviceRequest {
    /// The user's free-text legal question.
    pub message: String,
    /// Optional thread id for conversational continuity.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thread_id: Option<String>,
}

/// Response body for `POST /api/legal-advice`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LegalAdviceResponse {
    /// The generated legal analysis.
    pub response: String,
}
