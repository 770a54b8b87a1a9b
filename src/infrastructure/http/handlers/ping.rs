//! 健康检查
//!
//! 负载均衡与部署脚本用 `GET /api/ping` 判断提名服务是否就绪。

use axum::Json;
use serde::Serialize;

/// 服务名称，和 crate 名一致
const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Serialize)]
pub struct PingResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

/// 进程存活即返回 ok；不依赖任何外部资源
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        service: SERVICE_NAME,
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_identifies_service() {
        let Json(body) = ping().await;
        assert_eq!(body.service, "nominations");
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
