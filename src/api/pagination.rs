use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 25;
pub const MAX_LIMIT: i64 = 100;

/// Raw page/limit query params; normalized before use.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    /// Clamp to sane values: page ≥ 1, 1 ≤ limit ≤ MAX_LIMIT.
    pub fn normalize(self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        (page, limit)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: if limit > 0 { (total + limit - 1) / limit } else { 0 },
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(Pagination::new(1, 25, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 25, 1).total_pages, 1);
        assert_eq!(Pagination::new(1, 25, 25).total_pages, 1);
        assert_eq!(Pagination::new(1, 25, 26).total_pages, 2);
    }

    #[test]
    fn test_normalize_defaults_and_clamps() {
        assert_eq!(PageParams::default().normalize(), (1, DEFAULT_LIMIT));
        let params = PageParams {
            page: Some(0),
            limit: Some(10_000),
        };
        assert_eq!(params.normalize(), (1, MAX_LIMIT));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Pagination::new(3, 25, 100).offset(), 50);
    }
}
