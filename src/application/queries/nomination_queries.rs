//! Nomination Queries

use crate::domain::NominationIdsRequest;

/// 按 ID 列表查询提名详情
#[derive(Debug, Clone, Default)]
pub struct FindNominationDetails {
    pub nomination_ids: Vec<i64>,
}

impl From<NominationIdsRequest> for FindNominationDetails {
    fn from(request: NominationIdsRequest) -> Self {
        Self {
            nomination_ids: request.id_noms.unwrap_or_default(),
        }
    }
}
