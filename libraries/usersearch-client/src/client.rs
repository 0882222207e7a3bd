//! The search client.

use crate::error::{Result, SearchError};
use crate::query::encode_query;
use crate::response::{classify, classify_transport};
use crate::types::ClientConfig;
use reqwest::Client;
use tracing::{debug, warn};
use usersearch_core::protocol::{ACCESS_TOKEN_HEADER, MAX_PAGE_SIZE};
use usersearch_core::{SearchRequest, SearchResponse};

/// Client for the user search service.
///
/// Holds a pooled HTTP client; calls are independent and may run
/// concurrently from a shared reference. Nothing is retried.
///
/// # Example
///
/// ```ignore
/// use usersearch_client::{ClientConfig, SearchClient, SearchRequest};
///
/// let client = SearchClient::new(ClientConfig::new(url, "123qwerty"))?;
/// let page = client.find_users(&SearchRequest::new("ill").with_limit(3)).await?;
/// ```
pub struct SearchClient {
    http: Client,
    config: ClientConfig,
}

impl SearchClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("usersearch-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SearchError::TransportError)?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one page of users matching `request`.
    ///
    /// At most 25 rows are returned. One row beyond the page is always
    /// requested; if it arrives, `next_page` is set and the row dropped.
    pub async fn find_users(&self, request: &SearchRequest) -> Result<SearchResponse> {
        if request.limit < 0 {
            return Err(SearchError::InvalidLimit);
        }
        if request.offset < 0 {
            return Err(SearchError::InvalidOffset);
        }

        let page_size = request.limit.min(MAX_PAGE_SIZE);
        let wire_request = SearchRequest {
            limit: page_size + 1,
            ..request.clone()
        };
        let query = encode_query(&wire_request);
        let url = format!("{}?{}", self.config.url, query);

        debug!(url = %url, "Searching users");

        let response = self
            .http
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .send()
            .await
            .map_err(|e| classify_transport(e, &query))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_transport(e, &query))?;

        let mut users = match classify(status, &body, request) {
            Ok(users) => users,
            Err(e) => {
                warn!(status = %status, error = %e, "Search rejected");
                return Err(e);
            }
        };

        let page_size = usize::try_from(page_size).unwrap_or_default();
        let next_page = users.len() > page_size;
        users.truncate(page_size);

        debug!(rows = users.len(), next_page, "Search complete");

        Ok(SearchResponse { users, next_page })
    }
}
