//! Query string encoding for search requests.

use std::collections::BTreeMap;
use usersearch_core::protocol::params;
use usersearch_core::SearchRequest;

/// Encode `request` as a query string.
///
/// Keys come out sorted and values are form-urlencoded, so equal requests
/// always produce byte-identical strings. No validation happens here.
pub fn encode_query(request: &SearchRequest) -> String {
    let pairs = BTreeMap::from([
        (params::LIMIT, request.limit.to_string()),
        (params::OFFSET, request.offset.to_string()),
        (params::ORDER_BY, request.order_by.to_string()),
        (params::ORDER_FIELD, request.order_field.clone()),
        (params::QUERY, request.query.clone()),
    ]);

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
