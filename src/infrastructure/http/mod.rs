//! HTTP Layer - RESTful API
//!
//! Nominations 接口、健康检查与 OpenAPI 文档

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
