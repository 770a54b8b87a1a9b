//! Zarpe Context - Value Objects

use serde::{Deserialize, Serialize};

/// 离港摘要过滤条件
///
/// `startDate` 以 "YYYY-MM-DD" 为示例格式，但不做格式校验。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZarpeFilters {
    #[serde(default)]
    pub start_date: Option<String>,
}

impl ZarpeFilters {
    pub fn new(start_date: impl Into<String>) -> Self {
        Self {
            start_date: Some(start_date.into()),
        }
    }

    pub fn start_date(&self) -> Option<&str> {
        self.start_date.as_deref()
    }

    pub fn set_start_date(&mut self, start_date: Option<String>) {
        self.start_date = start_date;
    }
}

/// 离港摘要
///
/// 尚无字段，序列化为 `{}`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZarpeSummary {}

impl ZarpeSummary {
    pub fn new() -> Self {
        Self::default()
    }
}
