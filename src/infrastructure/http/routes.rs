//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                                        GET   健康检查
//! - /api/v1/nominations/nom-detail                   POST  获取提名详情
//! - /api/v1/nominations/find-resumen-with-filters    POST  查找离港摘要
//! - {docs.path}（默认 /api-docs/openapi.json）        GET   OpenAPI 文档
//! - {docs.markdown_path}（默认 /api-docs/nominations.md） GET   Markdown 文档

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// 路径为 None 时不提供对应的文档
pub fn create_routes(
    docs_path: Option<&str>,
    markdown_path: Option<&str>,
) -> Router<Arc<AppState>> {
    let mut router = Router::new().nest("/api", api_routes());

    if let Some(path) = docs_path {
        router = router.route(path, get(handlers::openapi_json));
    }
    if let Some(path) = markdown_path {
        router = router.route(path, get(handlers::api_markdown));
    }

    router
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/v1/nominations", nomination_routes())
}

/// Nomination 路由
fn nomination_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/nom-detail", post(handlers::find_detail_nom))
        .route(
            "/find-resumen-with-filters",
            post(handlers::find_resumen_zarpe_with_filters),
        )
}
