//! Response envelope for paginated listings.

use scout_core::pagination::PageMeta;
use serde::Serialize;

/// `{ "items": [...], "meta": { total, page, limit, totalPages } }`.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}
