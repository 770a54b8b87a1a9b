//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod nomination_queries;
mod zarpe_queries;

pub mod handlers;

pub use nomination_queries::*;
pub use zarpe_queries::*;
