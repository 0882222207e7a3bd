//! Configuration for the user search client.

use std::time::Duration;

/// Deadline applied to a search when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Where and how to reach the search service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Search endpoint; the query string is appended after `?`
    pub url: String,
    /// Shared secret sent in the `AccessToken` header
    pub access_token: String,
    /// Total deadline for one search, from connect to last body byte
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default timeout.
    pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-call deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
