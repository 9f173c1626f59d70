//! Page size configuration for list endpoints.

use serde::{Deserialize, Serialize};

/// Default and maximum page sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller omits `limit`.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// Page size used by room listings when the caller omits `limit`.
    #[serde(default = "default_room_limit")]
    pub room_limit: u64,
    /// Upper bound on any requested `limit`.
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            room_limit: default_room_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u64 {
    10
}

fn default_room_limit() -> u64 {
    25
}

fn default_max_limit() -> u64 {
    100
}
