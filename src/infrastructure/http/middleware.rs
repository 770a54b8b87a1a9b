//! HTTP Middleware
//!
//! 请求日志中间件

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 请求日志中间件
///
/// 所有请求以 debug 级别记录耗时；4xx 记录 warn，5xx 记录 error。
/// 反序列化失败（400/415/422）也在这里可见。
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP request completed"
        );
    }

    response
}
