//! Response DTOs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hostel_core::types::pagination::{PageResponse, Pagination};

/// Standard success response wrapper.
///
/// Lists carry `count`; paginated lists also carry `pagination` with the
/// neighbouring pages that exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Number of items in `data` for list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Neighbour page links for paginated responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            count: None,
            pagination: None,
            data,
        }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// A full list with its length.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            pagination: None,
            data: items,
        }
    }

    /// One page of a list.
    pub fn page(page: PageResponse<T>) -> Self {
        let pagination = page.pagination();
        Self {
            success: true,
            count: Some(page.items.len()),
            pagination: Some(pagination),
            data: page.items,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// A `201 Created` envelope.
#[derive(Debug)]
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(ApiResponse::ok(self.0))).into_response()
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> ApiResponse<Self> {
        ApiResponse::ok(Self {
            message: message.into(),
        })
    }
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database reachability, only reported by the readiness probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

#[cfg(test)]
mod tests {
    use hostel_core::types::pagination::PageRequest;

    use super::*;

    #[test]
    fn test_plain_envelope_omits_list_fields() {
        let json = serde_json::to_value(ApiResponse::ok(serde_json::json!({"id": 1}))).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": {"id": 1}}));
    }

    #[test]
    fn test_list_envelope_counts_items() {
        let json = serde_json::to_value(ApiResponse::list(vec!["a", "b"])).unwrap();
        assert_eq!(json["count"], 2);
        assert!(json.get("pagination").is_none());
    }

    #[test]
    fn test_page_envelope_has_links() {
        let req = PageRequest::new(2, 10);
        let page = PageResponse::new(vec![1; 10], &req, 35);
        let json = serde_json::to_value(ApiResponse::page(page)).unwrap();
        assert_eq!(json["count"], 10);
        assert_eq!(json["pagination"]["next"], serde_json::json!({"page": 3, "limit": 10}));
        assert_eq!(json["pagination"]["prev"], serde_json::json!({"page": 1, "limit": 10}));
    }
}
