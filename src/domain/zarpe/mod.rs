//! Zarpe Context - 离港限界上下文
//!
//! 职责:
//! - 离港摘要的过滤条件与结果结构

mod value_objects;

pub use value_objects::{ZarpeFilters, ZarpeSummary};
