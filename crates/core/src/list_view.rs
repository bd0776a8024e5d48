//! Client-side state for the paginated player table.
//!
//! Holds what the table UI needs between fetches (page, page size, last
//! known total, active filters and sort) and turns it into query
//! parameters for `GET /api/players` or the export endpoint. Rendering,
//! debouncing and request cancellation belong to the client runtime.

use crate::pagination::total_pages;
use crate::player_query::{PlayerFilter, SortDirection, SortField, SortKey, DEFAULT_PAGE_LIMIT};

/// Next sort state when the header for `field` is clicked.
///
/// The clicked field cycles ascending, descending, unsorted. Clicking a
/// field other than the active one starts it at ascending.
pub fn next_sort(current: Option<SortKey>, field: SortField) -> Option<SortKey> {
    match current {
        Some(key) if key.field == field => match key.direction {
            SortDirection::Asc => Some(SortKey::desc(field)),
            SortDirection::Desc => None,
        },
        _ => Some(SortKey::asc(field)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    page: i64,
    limit: i64,
    total: i64,
    filter: PlayerFilter,
    sort: Option<SortKey>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl ListView {
    pub fn new(limit: i64) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
            filter: PlayerFilter::default(),
            sort: None,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn filter(&self) -> &PlayerFilter {
        &self.filter
    }

    pub fn total_pages(&self) -> i64 {
        total_pages(self.total, self.limit)
    }

    /// Direction shown next to a column header, if that column is sorted.
    pub fn sort_indicator(&self, field: SortField) -> Option<SortDirection> {
        self.sort
            .filter(|key| key.field == field)
            .map(|key| key.direction)
    }

    /// Record the total reported by the last list response.
    pub fn apply_total(&mut self, total: i64) {
        self.total = total.max(0);
    }

    /// Replace the filters. Any filter change goes back to page 1.
    pub fn set_filter(&mut self, filter: PlayerFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Advance the sort cycle for `field` and go back to page 1.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = next_sort(self.sort, field);
        self.page = 1;
    }

    /// Move to the next page. Returns `false` when already on the last one.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous page. Returns `false` when already on page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Query parameters for the list endpoint. Unset values are omitted.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        pairs.extend(self.filter_pairs());
        pairs
    }

    /// Query parameters for the export endpoint: filters and sort only.
    pub fn to_export_pairs(&self) -> Vec<(&'static str, String)> {
        self.filter_pairs()
    }

    fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let f = &self.filter;
        let text = [
            ("name", &f.name),
            ("club", &f.club),
            ("nationality", &f.nationality),
            ("position", &f.position),
        ];
        let numeric = [
            ("minRating", f.min_rating),
            ("maxRating", f.max_rating),
            ("minSpeed", f.min_speed),
            ("maxSpeed", f.max_speed),
        ];

        let mut pairs: Vec<(&'static str, String)> = text
            .into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .collect();
        pairs.extend(
            numeric
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
        );
        if let Some(key) = self.sort {
            pairs.push(("sort", key.to_param()));
        }
        pairs
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
