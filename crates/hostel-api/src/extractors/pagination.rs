//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use hostel_core::config::PaginationConfig;
use hostel_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page.
    pub limit: Option<u64>,
}

impl PaginationParams {
    /// Converts to a `PageRequest` using the general default page size.
    pub fn into_page_request(self, config: &PaginationConfig) -> PageRequest {
        self.resolve(config.default_limit, config.max_limit)
    }

    /// Converts to a `PageRequest` using the room listing default.
    pub fn into_room_page_request(self, config: &PaginationConfig) -> PageRequest {
        self.resolve(config.room_limit, config.max_limit)
    }

    fn resolve(self, default_limit: u64, max_limit: u64) -> PageRequest {
        PageRequest::bounded(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(default_limit),
            max_limit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_listing() {
        let config = PaginationConfig::default();
        let params = PaginationParams::default();
        assert_eq!(params.into_page_request(&config), PageRequest::new(1, 10));
        assert_eq!(params.into_room_page_request(&config), PageRequest::new(1, 25));
    }

    #[test]
    fn test_limit_is_capped() {
        let config = PaginationConfig::default();
        let params = PaginationParams {
            page: Some(0),
            limit: Some(1000),
        };
        let req = params.into_page_request(&config);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 100);
    }

    #[test]
    fn test_oversized_page_yields_valid_offset() {
        let config = PaginationConfig::default();
        let params = PaginationParams {
            page: Some(u64::MAX),
            limit: Some(config.max_limit),
        };
        let req = params.into_page_request(&config);
        assert!(req.offset() >= 0);
        assert!(req.offset().checked_add(req.sql_limit()).is_some());
    }
}
