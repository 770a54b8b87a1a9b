//! Nomination Context - 提名限界上下文
//!
//! 职责:
//! - 按 ID 列表查询提名详情的请求/响应结构

mod value_objects;

pub use value_objects::{NominationDetails, NominationIdsRequest};
