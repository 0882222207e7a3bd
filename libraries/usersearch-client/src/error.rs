//! Error types for the user search client.

use thiserror::Error;

/// Every way a search can fail.
///
/// The set is closed: callers can match on the variant to decide what to do,
/// and the display strings are stable.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Negative limit, rejected before any request is made
    #[error("limit must be > 0")]
    InvalidLimit,

    /// Negative offset, rejected before any request is made
    #[error("offset must be > 0")]
    InvalidOffset,

    /// The configured deadline passed before a response arrived
    #[error("timeout for {query}")]
    Timeout { query: String },

    /// Server answered 401
    #[error("Bad AccessToken")]
    Unauthorized,

    /// Server refused to sort by the submitted field
    #[error("OrderField {0} invalid")]
    BadOrderField(String),

    /// Server answered 400 with any other message
    #[error("unknown bad request error: {0}")]
    BadRequestOther(String),

    /// A 400 body that is not `{"Error": "..."}`
    #[error("cant unpack error json: {0}")]
    ErrorBodyDecodeFailed(#[source] serde_json::Error),

    /// A 200 body that is not a list of users
    #[error("cant unpack result json: {0}")]
    ResultBodyDecodeFailed(#[source] serde_json::Error),

    /// Server answered with any status other than 200, 400 or 401
    #[error("SearchServer fatal error")]
    FatalServerError { status: u16 },

    /// Connection-level failure with no usable response
    #[error("unknown error {0}")]
    TransportError(#[source] reqwest::Error),
}

/// Result type for search client operations.
pub type Result<T> = std::result::Result<T, SearchError>;
