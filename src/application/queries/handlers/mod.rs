//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod nomination_handlers;
mod zarpe_handlers;

pub use nomination_handlers::*;
pub use zarpe_handlers::*;
