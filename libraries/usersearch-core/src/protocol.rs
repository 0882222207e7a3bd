//! Constants and shapes that make up the search wire contract.

use serde::{Deserialize, Serialize};

/// Header carrying the shared access token.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Largest page a client will ever display.
pub const MAX_PAGE_SIZE: i64 = 25;

/// Sentinel sent by the server when `order_field` is not sortable.
pub const ERROR_BAD_ORDER_FIELD: &str = "ErrorBadOrderField";

/// Message sent by the server when `order_by` is out of range.
pub const ERROR_BAD_ORDER_BY: &str = "order_by must be 1, -1 or 0";

/// Message sent by the server when `offset` skips past every match.
pub const ERROR_OFFSET_TOO_LARGE: &str =
    "offset > number of users found, need to use smaller value";

/// Query string keys, in the order they are encoded.
pub mod params {
    /// Maximum number of rows to return
    pub const LIMIT: &str = "limit";
    /// Number of matching rows to skip
    pub const OFFSET: &str = "offset";
    /// Sort direction (`-1`, `0`, `1`)
    pub const ORDER_BY: &str = "order_by";
    /// Sort key (`Id`, `Name`, `Age` or empty)
    pub const ORDER_FIELD: &str = "order_field";
    /// Substring to look for in name and about
    pub const QUERY: &str = "query";
}

/// Body of every 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Sentinel or free-text message
    #[serde(rename = "Error")]
    pub error: String,
}

impl ErrorBody {
    /// Wrap a message
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
