//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Nomination Context: 提名详情
//! - Zarpe Context: 离港（zarpe）摘要

pub mod nomination;
pub mod zarpe;

pub use nomination::{NominationDetails, NominationIdsRequest};
pub use zarpe::{ZarpeFilters, ZarpeSummary};
