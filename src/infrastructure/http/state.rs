//! Application State
//!
//! 包含所有 Query Handlers 以及预先渲染的 API 文档

use std::sync::Arc;

use utoipa::openapi::OpenApi;

use crate::application::{FindNominationDetailsHandler, FindZarpeSummariesHandler};
use crate::infrastructure::apidoc::ApiDocument;

/// 应用状态
///
/// 只读共享，请求之间没有可变状态。
pub struct AppState {
    // ========== Query Handlers ==========
    pub find_nomination_details_handler: FindNominationDetailsHandler,
    pub find_zarpe_summaries_handler: FindZarpeSummariesHandler,

    // ========== API Docs ==========
    pub openapi: Arc<OpenApi>,
    pub markdown: Arc<str>,
}

impl AppState {
    /// 创建应用状态，文档在此处渲染一次
    pub fn new(api: &ApiDocument) -> Self {
        Self {
            find_nomination_details_handler: FindNominationDetailsHandler::new(),
            find_zarpe_summaries_handler: FindZarpeSummariesHandler::new(),
            openapi: Arc::new(api.to_openapi()),
            markdown: Arc::from(api.to_markdown()),
        }
    }
}
