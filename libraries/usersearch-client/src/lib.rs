//! User Search Client
//!
//! HTTP client library for the user search service.
//!
//! # Features
//!
//! - **Encoding**: search parameters become a canonical, sorted query string
//! - **Paging**: one extra row is requested to detect whether a next page exists
//! - **Errors**: every failure maps onto a closed set of [`SearchError`] kinds
//!
//! # Example
//!
//! ```ignore
//! use usersearch_client::{ClientConfig, OrderBy, SearchClient, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://127.0.0.1:8080", "123qwerty");
//!     let client = SearchClient::new(config)?;
//!
//!     let request = SearchRequest::new("ill")
//!         .with_limit(3)
//!         .order_by("Age", OrderBy::Desc);
//!     let page = client.find_users(&request).await?;
//!     println!("{} users, more: {}", page.users.len(), page.next_page);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod query;
mod response;
mod types;

pub use client::SearchClient;
pub use error::{Result, SearchError};
pub use query::encode_query;
pub use response::{classify, classify_transport};
pub use types::{ClientConfig, DEFAULT_TIMEOUT};

// Re-export the wire types so callers need only this crate
pub use usersearch_core::{OrderBy, SearchRequest, SearchResponse, User};
