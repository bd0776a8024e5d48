//! Page metadata attached to list responses.

use serde::Serialize;

/// `meta` block of a paginated response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        Self {
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        }
    }
}

/// `ceil(total / limit)`, never less than 1 so an empty result still has a page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 1;
    }
    ((total - 1) / limit + 1).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_still_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn partial_last_page_rounds_up() {
        assert_eq!(total_pages(21, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
    }

    #[test]
    fn meta_serializes_camel_case() {
        let json = serde_json::to_value(PageMeta::new(2, 1, 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"total": 2, "page": 1, "limit": 10, "totalPages": 1})
        );
    }
}
