//! Nomination Query Handlers

use crate::application::error::ApplicationError;
use crate::application::queries::FindNominationDetails;
use crate::domain::NominationDetails;

/// FindNominationDetails Handler
///
/// 请求中的 ID 只被读取，不参与查询；结果始终为默认值。
#[derive(Debug, Clone, Default)]
pub struct FindNominationDetailsHandler;

impl FindNominationDetailsHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        query: FindNominationDetails,
    ) -> Result<NominationDetails, ApplicationError> {
        tracing::debug!(
            requested = query.nomination_ids.len(),
            "Finding nomination details"
        );

        Ok(NominationDetails::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_default_details() {
        let handler = FindNominationDetailsHandler::new();
        let query = FindNominationDetails {
            nomination_ids: vec![1, 2, 3],
        };

        let details = handler.handle(query).await.unwrap();
        assert_eq!(details, NominationDetails::default());
        assert_eq!(details.id(), None);
    }

    #[tokio::test]
    async fn test_accepts_empty_ids() {
        let handler = FindNominationDetailsHandler::new();
        let details = handler
            .handle(FindNominationDetails::default())
            .await
            .unwrap();
        assert_eq!(details.id(), None);
    }
}
