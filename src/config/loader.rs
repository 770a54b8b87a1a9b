//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "NOMINATIONS";

/// API 路由前缀，文档路径不得与之重叠
const API_PREFIX: &str = "/api";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `NOMINATIONS_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `NOMINATIONS_SERVER__HOST=127.0.0.1`
/// - `NOMINATIONS_SERVER__PORT=9090`
/// - `NOMINATIONS_DOCS__ENABLED=false`
/// - `NOMINATIONS_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with_env_prefix(config_path, ENV_PREFIX)
}

fn load_with_env_prefix(
    config_path: Option<&Path>,
    env_prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.max_body_bytes", 1024 * 1024)?
        .set_default("docs.enabled", true)?
        .set_default("docs.path", "/api-docs/openapi.json")?
        .set_default("docs.markdown_path", "/api-docs/nominations.md")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: NOMINATIONS_SERVER__PORT=9090
    builder = builder.add_source(
        Environment::with_prefix(env_prefix)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "Max body size cannot be 0".to_string(),
        ));
    }

    if config.docs.enabled {
        validate_docs_path(&config.docs.path)?;
        validate_docs_path(&config.docs.markdown_path)?;
        if config.docs.path == config.docs.markdown_path {
            return Err(ConfigError::ValidationError(format!(
                "OpenAPI and Markdown docs share the same path: {}",
                config.docs.path
            )));
        }
    }

    if !LOG_LEVELS.contains(&config.log.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "Unknown log level: {}",
            config.log.level
        )));
    }

    Ok(())
}

/// 文档路径必须是绝对的静态路径，且不能落在 API 路由前缀下
fn validate_docs_path(path: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "Docs path must start with '/': {}",
            path
        )));
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::ValidationError(
            "Docs path cannot be the root path".to_string(),
        ));
    }

    if trimmed == API_PREFIX || trimmed.starts_with(&format!("{}/", API_PREFIX)) {
        return Err(ConfigError::ValidationError(format!(
            "Docs path collides with API routes: {}",
            path
        )));
    }

    if path.contains(':') || path.contains('*') || path.contains('{') {
        return Err(ConfigError::ValidationError(format!(
            "Docs path cannot contain route parameters: {}",
            path
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("API Docs Enabled: {}", config.docs.enabled);
    if config.docs.enabled {
        tracing::info!("API Docs Path: {}", config.docs.path);
        tracing::info!("API Docs Markdown Path: {}", config.docs.markdown_path);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("Log JSON: {}", config.log.json);
    tracing::info!("=================================");
}
