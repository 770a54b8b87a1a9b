//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::AppConfig;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    /// OpenAPI 文档路径，None 表示不提供
    pub docs_path: Option<String>,
    /// Markdown 文档路径，None 表示不提供
    pub markdown_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: 1024 * 1024,
            docs_path: Some("/api-docs/openapi.json".to_string()),
            markdown_path: Some("/api-docs/nominations.md".to_string()),
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&AppConfig> for ServerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            host: config.server.host.clone(),
            port: config.server.port,
            max_body_bytes: config.server.max_body_bytes,
            docs_path: config
                .docs
                .enabled
                .then(|| config.docs.path.clone()),
            markdown_path: config
                .docs
                .enabled
                .then(|| config.docs.markdown_path.clone()),
        }
    }
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 构建 Router
    pub fn router(&self) -> Router {
        // CORS 配置 - 允许所有来源，携带 Bearer token
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600));

        create_routes(
            self.config.docs_path.as_deref(),
            self.config.markdown_path.as_deref(),
        )
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
            .layer(middleware::from_fn(request_logging_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        let addr = self.config.addr();

        let listener = TcpListener::bind(&addr).await?;
        info!("HTTP server listening on {}", listener.local_addr()?);
        if let Some(path) = &self.config.docs_path {
            info!("OpenAPI document served at {}", path);
        }
        if let Some(path) = &self.config.markdown_path {
            info!("Markdown document served at {}", path);
        }

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_app_config() {
        let mut app = AppConfig::default();
        app.server.port = 9000;

        let config = ServerConfig::from(&app);
        assert_eq!(config.addr(), "0.0.0.0:9000");
        assert_eq!(config.docs_path.as_deref(), Some("/api-docs/openapi.json"));
        assert_eq!(config.markdown_path.as_deref(), Some("/api-docs/nominations.md"));

        app.docs.enabled = false;
        let config = ServerConfig::from(&app);
        assert_eq!(config.docs_path, None);
        assert_eq!(config.markdown_path, None);
    }

    #[test]
    fn test_server_config_new_keeps_defaults() {
        let config = ServerConfig::new("127.0.0.1", 3000);
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(config.max_body_bytes, 1024 * 1024);
    }
}
