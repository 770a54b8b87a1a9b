//! Nominations - 提名与离港摘要 HTTP 服务

use nominations::config::{load_config, print_config, LogConfig};
use nominations::infrastructure::{nominations_api, AppState, HttpServer, ServerConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing(log: &LogConfig) {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(log.filter_directives()))
    };

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Nominations service v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let api = nominations_api();
    let state = AppState::new(&api);
    let server = HttpServer::new(ServerConfig::from(&config), state);

    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
