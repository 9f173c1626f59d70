//! Pagination types for list endpoints.
//!
//! Pages are 1-based. A response advertises `next` only when items exist
//! past the current page and `prev` only when the page does not start at
//! the first item.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_LIMIT: u64 = 10;
/// Maximum page size.
pub const MAX_LIMIT: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping both values into range.
    pub fn new(page: u64, limit: u64) -> Self {
        Self::bounded(page, limit, MAX_LIMIT)
    }

    /// Create a page request with an explicit upper bound on `limit`.
    ///
    /// `page` is capped so that `page * limit` still fits in an `i64`
    /// SQL offset.
    pub fn bounded(page: u64, limit: u64, max_limit: u64) -> Self {
        let limit = limit.clamp(1, max_limit.clamp(1, i64::MAX as u64));
        let max_page = i64::MAX as u64 / limit;
        Self {
            page: page.clamp(1, max_page),
            limit,
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        let offset = self.page.saturating_sub(1).saturating_mul(self.limit);
        i64::try_from(offset).unwrap_or(i64::MAX)
    }

    /// Return the SQL `LIMIT` value.
    pub fn sql_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A link to a neighbouring page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
}

/// Neighbour links rendered into the response envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Next page, present only when more items exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
    /// Previous page, present only when this page is not the first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageLink>,
}

/// Paginated result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of items across all pages.
    pub total: u64,
}

impl<T> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            limit: request.limit,
            total,
        }
    }

    /// Neighbour links for this page.
    pub fn pagination(&self) -> Pagination {
        let start = self.page.saturating_sub(1).saturating_mul(self.limit);
        let end = self.page.saturating_mul(self.limit);

        Pagination {
            next: (end < self.total).then_some(PageLink {
                page: self.page.saturating_add(1),
                limit: self.limit,
            }),
            prev: (start > 0).then_some(PageLink {
                page: self.page.saturating_sub(1),
                limit: self.limit,
            }),
        }
    }

    /// Transform every item, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_clamps_values() {
        let req = PageRequest::new(0, 500);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, MAX_LIMIT);
        assert_eq!(req.offset(), 0);

        let req = PageRequest::new(3, 10);
        assert_eq!(req.offset(), 20);
    }

    #[test]
    fn test_first_page_has_only_next() {
        let req = PageRequest::new(1, 10);
        let page = PageResponse::new(vec![0; 10], &req, 25);
        let links = page.pagination();
        assert_eq!(links.next, Some(PageLink { page: 2, limit: 10 }));
        assert_eq!(links.prev, None);
    }

    #[test]
    fn test_last_page_has_only_prev() {
        let req = PageRequest::new(3, 10);
        let page = PageResponse::new(vec![0; 5], &req, 25);
        let links = page.pagination();
        assert_eq!(links.next, None);
        assert_eq!(links.prev, Some(PageLink { page: 2, limit: 10 }));
    }

    #[test]
    fn test_single_page_has_no_links() {
        let req = PageRequest::new(1, 25);
        let page = PageResponse::new(vec![0; 3], &req, 3);
        let json = serde_json::to_value(page.pagination()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_exact_boundary_has_no_next() {
        let req = PageRequest::new(2, 10);
        let page = PageResponse::new(vec![0; 10], &req, 20);
        assert!(page.pagination().next.is_none());
    }

    #[test]
    fn test_huge_page_stays_within_sql_range() {
        let req = PageRequest::new(u64::MAX, 100);
        assert_eq!(req.page, i64::MAX as u64 / 100);
        assert!(req.offset() >= 0);
        assert!(req.offset() <= i64::MAX - 100);

        let page = PageResponse::new(Vec::<u8>::new(), &req, 5);
        let links = page.pagination();
        assert!(links.next.is_none());
        assert_eq!(links.prev.map(|p| p.page), Some(req.page - 1));
    }

    #[test]
    fn test_unclamped_response_does_not_overflow() {
        let req = PageRequest {
            page: u64::MAX / 2,
            limit: 100,
        };
        assert_eq!(req.offset(), i64::MAX);

        let page = PageResponse::new(Vec::<u8>::new(), &req, 5);
        assert!(page.pagination().next.is_none());
    }
}
