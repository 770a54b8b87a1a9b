//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// API 文档配置
    #[serde(default)]
    pub docs: DocsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    1024 * 1024 // 1 MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}", host, self.port)
    }
}

/// API 文档配置
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
    /// 是否提供 API 文档
    #[serde(default = "default_docs_enabled")]
    pub enabled: bool,

    /// OpenAPI JSON 路由路径
    #[serde(default = "default_docs_path")]
    pub path: String,

    /// Markdown 文档路由路径
    #[serde(default = "default_markdown_path")]
    pub markdown_path: String,
}

fn default_docs_enabled() -> bool {
    true
}

fn default_docs_path() -> String {
    "/api-docs/openapi.json".to_string()
}

fn default_markdown_path() -> String {
    "/api-docs/nominations.md".to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled: default_docs_enabled(),
            path: default_docs_path(),
            markdown_path: default_markdown_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LogConfig {
    /// 默认的 EnvFilter 指令
    pub fn filter_directives(&self) -> String {
        format!(
            "{},nominations={},tower_http=debug",
            self.level, self.level
        )
    }
}
