//! Nomination HTTP Handlers
//!
//! 两个端点都不做校验，请求体的反序列化错误由 axum 的 `Json` 提取器处理
//! （语法错误 400，缺少 JSON Content-Type 415，字段类型错误 422）。

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{FindNominationDetails, FindZarpeSummaries};
use crate::domain::{NominationDetails, NominationIdsRequest, ZarpeFilters, ZarpeSummary};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取提名详情（findDetailNom）
pub async fn find_detail_nom(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NominationIdsRequest>,
) -> Result<Json<NominationDetails>, ApiError> {
    let query = FindNominationDetails::from(req);

    let result = state.find_nomination_details_handler.handle(query).await?;

    Ok(Json(result))
}

/// 按过滤条件查找离港摘要（findResumenZarpeWithFilters）
pub async fn find_resumen_zarpe_with_filters(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ZarpeFilters>,
) -> Result<Json<Vec<ZarpeSummary>>, ApiError> {
    let query = FindZarpeSummaries::from(req);

    let result = state.find_zarpe_summaries_handler.handle(query).await?;

    tracing::debug!(count = result.len(), "Zarpe summaries found");

    Ok(Json(result))
}
