//! API Description - 声明式 API 文档注册表
//!
//! 以数据而非类型属性描述接口:
//! - model: 控制器/端点/响应描述模型，DTO schema 使用 utoipa 类型
//! - openapi: 用 utoipa builder 生成 OpenAPI 3.0 文档
//! - markdown: 面向人阅读的 Markdown 文档
//! - nominations: 本服务的接口与 DTO 描述

mod markdown;
mod model;
mod nominations;
mod openapi;

pub use model::{ApiDocument, BodyDoc, ControllerDoc, DescribeSchema, EndpointDoc, ResponseDoc};
pub use nominations::{nominations_api, NOMINATIONS_BASE_PATH};
