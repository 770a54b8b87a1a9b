//! Zarpe Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::FindZarpeSummaries;
use crate::domain::ZarpeSummary;

/// FindZarpeSummaries Handler
///
/// 过滤条件被接受但不生效；结果始终是单个默认摘要。
#[derive(Debug, Clone, Default)]
pub struct FindZarpeSummariesHandler;

impl FindZarpeSummariesHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        query: FindZarpeSummaries,
    ) -> Result<Vec<ZarpeSummary>, ApplicationError> {
        tracing::debug!(
            start_date = query.start_date.as_deref().unwrap_or("-"),
            "Finding zarpe summaries"
        );

        Ok(vec![ZarpeSummary::new()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_single_default_summary() {
        let handler = FindZarpeSummariesHandler::new();
        let query = FindZarpeSummaries {
            start_date: Some("2024-01-01".to_string()),
        };

        let summaries = handler.handle(query).await.unwrap();
        assert_eq!(summaries, vec![ZarpeSummary::default()]);
    }

    #[tokio::test]
    async fn test_filter_does_not_change_result() {
        let handler = FindZarpeSummariesHandler::new();
        let with_date = handler
            .handle(FindZarpeSummaries {
                start_date: Some("1999-12-31".to_string()),
            })
            .await
            .unwrap();
        let without_date = handler
            .handle(FindZarpeSummaries::default())
            .await
            .unwrap();
        assert_eq!(with_date, without_date);
        assert_eq!(with_date.len(), 1);
    }
}
