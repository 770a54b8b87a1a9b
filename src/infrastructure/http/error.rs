//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const UNAUTHORIZED: i32 = 401;
    pub const FORBIDDEN: i32 = 403;
    pub const NOT_FOUND: i32 = 404;
    pub const INTERNAL_ERROR: i32 = 500;
}

/// API 错误
///
/// 与 API 文档中声明的 401/403/404 对应，使用真实的 HTTP 状态码。
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status_and_errno(&self) -> (StatusCode, i32) {
        match self {
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, errno::UNAUTHORIZED),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, errno::FORBIDDEN),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, errno::NOT_FOUND),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, errno::INTERNAL_ERROR),
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_errno();
        let msg = self.message();

        if status.is_server_error() {
            tracing::error!(errno = code, error = %msg, "Internal server error");
        } else {
            tracing::warn!(errno = code, error = %msg, "Request rejected");
        }

        (status, Json(ErrorResponse::new(code, msg))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            ApplicationError::Forbidden(msg) => ApiError::Forbidden(msg),
            e @ ApplicationError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}
