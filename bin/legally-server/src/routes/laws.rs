//! Static law catalogue with offset/limit paging.

use std::sync::{Arc, LazyLock};

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

use crate::schemas::laws::{LawItem, LawsPage};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(browse_laws), components(schemas(LawItem, LawsPage)))]
pub struct LawsApi;

/// Register the browse-laws route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/browse/laws", get(browse_laws))
}

static LAW_ITEMS: LazyLock<Vec<LawItem>> = LazyLock::new(|| {
    let item = |id: &str, title: &str, act: &str, section: Option<&str>, summary: &str| LawItem {
        id: id.to_owned(),
        title: title.to_owned(),
        act: act.to_owned(),
        section: section.map(str::to_owned),
        summary: summary.to_owned(),
    };
    vec![
        item(
            "ipc-302",
            "Murder",
            "Indian Penal Code (IPC)",
            Some("Section 302"),
            "Punishment for murder. Death or imprisonment for life, and fine.",
        ),
        item(
            "ipc-304",
            "Culpable Homicide Not Amounting to Murder",
            "Indian Penal Code (IPC)",
            Some("Section 304"),
            "Punishment varies based on intention/knowledge. Imprisonment up to life or up to 10 years and fine.",
        ),
        item(
            "ipc-379",
            "Theft",
            "Indian Penal Code (IPC)",
            Some("Section 379"),
            "Punishment for theft. Imprisonment up to 3 years, or fine, or both.",
        ),
        item(
            "ipc-323",
            "Voluntarily Causing Hurt",
            "Indian Penal Code (IPC)",
            Some("Section 323"),
            "Imprisonment up to 1 year, or fine up to ₹1,000, or both, except in cases under Section 334.",
        ),
        item(
            "crpc-fir",
            "First Information Report (FIR)",
            "Criminal Procedure Code (CrPC)",
            Some("Section 154"),
            "Information relating to cognizable offence recorded by police. Initiates investigation.",
        ),
        item(
            "evidence-act-65b",
            "Admissibility of Electronic Records",
            "Indian Evidence Act",
            Some("Section 65B"),
            "Electronic records are admissible subject to certificate and conditions.",
        ),
        item(
            "contract-73",
            "Compensation for Loss or Damage",
            "Indian Contract Act",
            Some("Section 73"),
            "Damages for breach of contract—loss naturally arising or which parties knew would likely result.",
        ),
    ]
});

#[derive(Debug, Deserialize, IntoParams)]
pub struct LawsParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Browse the law catalogue (`GET /api/browse/laws?page=&limit=`).
#[utoipa::path(
    get,
    path = "/api/browse/laws",
    tag = "laws",
    params(LawsParams),
    responses(
        (status = 200, description = "One page of the catalogue", body = LawsPage),
    )
)]
pub async fn browse_laws(Query(params): Query<LawsParams>) -> Json<LawsPage> {
    Json(page_of_laws(params.page, params.limit))
}

fn page_of_laws(page: Option<usize>, limit: Option<usize>) -> LawsPage {
    let page = page.unwrap_or(1).max(1);
    let limit = match limit {
        Some(l) if l >= 1 => l,
        _ => 10,
    };
    let start = (page - 1).saturating_mul(limit);
    let items: Vec<LawItem> = LAW_ITEMS.iter().skip(start).take(limit).cloned().collect();
    LawsPage {
        items,
        total: LAW_ITEMS.len(),
        page,
        limit,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn catalogue_has_seven_entries() {
        assert_eq!(LAW_ITEMS.len(), 7);
    }

    #[test]
    fn second_page_of_three_returns_items_four_to_six() {
        let page = page_of_laws(Some(2), Some(3));
        assert_eq!(page.total, 7);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].id, LAW_ITEMS[3].id);
        assert_eq!(page.items[2].id, LAW_ITEMS[5].id);
    }

    #[test]
    fn page_and_limit_are_clamped() {
        let page = page_of_laws(Some(0), Some(0));
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.items.len(), 7);
    }

    #[test]
    fn missing_params_default_to_first_page_of_ten() {
        let page = page_of_laws(None, None);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.items.len(), 7);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let page = page_of_laws(Some(5), Some(10));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 7);
    }
}
