//! Nomination Context - Value Objects

use serde::{Deserialize, Serialize};

/// 提名详情响应
///
/// `id` 目前从不被填充，序列化为 `{"id": null}`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominationDetails {
    pub id: Option<i64>,
}

impl NominationDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

/// 提名 ID 列表请求
///
/// 缺失、`null` 与空列表均被接受，不做去重。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NominationIdsRequest {
    #[serde(default)]
    pub id_noms: Option<Vec<i64>>,
}

impl NominationIdsRequest {
    pub fn new(id_noms: Vec<i64>) -> Self {
        Self {
            id_noms: Some(id_noms),
        }
    }

    pub fn id_noms(&self) -> &[i64] {
        self.id_noms.as_deref().unwrap_or_default()
    }

    pub fn set_id_noms(&mut self, id_noms: Option<Vec<i64>>) {
        self.id_noms = id_noms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_serialize_null_id() {
        let json = serde_json::to_value(NominationDetails::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "id": null }));
    }

    #[test]
    fn test_details_accessors() {
        let mut details = NominationDetails::default();
        assert_eq!(details.id(), None);
        details.set_id(Some(7));
        assert_eq!(details.id(), Some(7));
    }

    #[test]
    fn test_ids_request_uses_camel_case() {
        let req: NominationIdsRequest = serde_json::from_str(r#"{"idNoms":[1,2,3]}"#).unwrap();
        assert_eq!(req.id_noms(), &[1, 2, 3]);
    }

    #[test]
    fn test_ids_request_missing_or_null_is_empty() {
        let missing: NominationIdsRequest = serde_json::from_str("{}").unwrap();
        assert!(missing.id_noms().is_empty());

        let null: NominationIdsRequest = serde_json::from_str(r#"{"idNoms":null}"#).unwrap();
        assert!(null.id_noms().is_empty());
    }

    #[test]
    fn test_ids_request_keeps_duplicates_and_order() {
        let req: NominationIdsRequest = serde_json::from_str(r#"{"idNoms":[3,1,3]}"#).unwrap();
        assert_eq!(req.id_noms(), &[3, 1, 3]);
    }

    #[test]
    fn test_ids_request_rejects_wrong_type() {
        let result = serde_json::from_str::<NominationIdsRequest>(r#"{"idNoms":"1,2"}"#);
        assert!(result.is_err());
    }
}
