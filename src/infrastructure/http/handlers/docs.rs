//! API 文档端点

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse, Json};
use utoipa::openapi::OpenApi;

use crate::infrastructure::http::state::AppState;

/// 返回启动时生成的 OpenAPI 文档
pub async fn openapi_json(State(state): State<Arc<AppState>>) -> Json<OpenApi> {
    Json(state.openapi.as_ref().clone())
}

/// 返回 Markdown 格式的接口文档
pub async fn api_markdown(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        state.markdown.to_string(),
    )
}
