//! Mapping of search responses onto results and errors.

use crate::error::{Result, SearchError};
use reqwest::StatusCode;
use usersearch_core::protocol::ERROR_BAD_ORDER_FIELD;
use usersearch_core::{ErrorBody, SearchRequest, User};

/// Decide the outcome of a search from the status code and raw body.
///
/// `request` is the one the caller submitted, so a rejected order field is
/// reported as the caller spelled it rather than as the server's sentinel.
pub fn classify(status: StatusCode, body: &[u8], request: &SearchRequest) -> Result<Vec<User>> {
    match status {
        StatusCode::OK => serde_json::from_slice(body).map_err(SearchError::ResultBodyDecodeFailed),
        StatusCode::UNAUTHORIZED => Err(SearchError::Unauthorized),
        StatusCode::BAD_REQUEST => {
            let body: ErrorBody =
                serde_json::from_slice(body).map_err(SearchError::ErrorBodyDecodeFailed)?;
            if body.error == ERROR_BAD_ORDER_FIELD {
                Err(SearchError::BadOrderField(request.order_field.clone()))
            } else {
                Err(SearchError::BadRequestOther(body.error))
            }
        }
        other => Err(SearchError::FatalServerError {
            status: other.as_u16(),
        }),
    }
}

/// Classify a failure that left no usable response.
///
/// Deadline expiry keeps the query string that was in flight.
pub fn classify_transport(error: reqwest::Error, query: &str) -> SearchError {
    if error.is_timeout() {
        SearchError::Timeout {
            query: query.to_string(),
        }
    } else {
        SearchError::TransportError(error)
    }
}
