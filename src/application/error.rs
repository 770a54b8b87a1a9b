//! 应用层错误定义
//!
//! 统一的查询错误类型。当前查询处理器总是成功，这些变体对应
//! API 文档中声明的 401/403/404 结果。

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 缺少或无效的凭证
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 调用方没有执行该操作的权限
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 资源未找到
    #[error("{resource} not found: {detail}")]
    NotFound {
        resource: &'static str,
        detail: String,
    },

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource: &'static str, detail: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            detail: detail.into(),
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ApplicationError::not_found("Nomination", "ids [1, 2]");
        assert_eq!(err.to_string(), "Nomination not found: ids [1, 2]");
    }

    #[test]
    fn test_internal_message() {
        assert_eq!(
            ApplicationError::internal("boom").to_string(),
            "Internal error: boom"
        );
    }
}
