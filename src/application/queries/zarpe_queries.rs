//! Zarpe Queries

use crate::domain::ZarpeFilters;

/// 按过滤条件查询离港摘要
#[derive(Debug, Clone, Default)]
pub struct FindZarpeSummaries {
    pub start_date: Option<String>,
}

impl From<ZarpeFilters> for FindZarpeSummaries {
    fn from(filters: ZarpeFilters) -> Self {
        Self {
            start_date: filters.start_date,
        }
    }
}
