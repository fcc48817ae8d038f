use crate::routes::{admin, advice, laws, root};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "legally-server",
    description = "Legal AI assistant backend API",
    version = "0.1.0",
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut spec = ApiDoc::openapi();
    spec.merge(root::RootApi::openapi());
    spec.merge(advice::AdviceApi::openapi());
    spec.merge(laws::LawsApi::openapi());
    spec.merge(admin::api_docs());
    spec
}
