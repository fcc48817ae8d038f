use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry in the law catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LawItem {
    pub id: String,
    pub title: String,
    pub act: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub summary: String,
}

/// Response body for `GET /api/browse/laws`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LawsPage {
    pub items: Vec<LawItem>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}
