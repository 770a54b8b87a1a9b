//! Nominations - 提名与离港（zarpe）摘要服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Nomination Context: 提名详情请求/响应
//! - Zarpe Context: 离港过滤条件与摘要
//!
//! 应用层 (application/):
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - API Doc: OpenAPI 文档注册表

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
