//! Infrastructure Layer - 基础设施层
//!
//! - http: axum 路由、处理器与服务器
//! - apidoc: 声明式 API 描述与 OpenAPI 渲染

pub mod apidoc;
pub mod http;

pub use apidoc::nominations_api;
pub use http::{AppState, HttpServer, ServerConfig};
