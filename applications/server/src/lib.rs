//! User Search Server Library
//!
//! Reference implementation of the user search service: loads a fixed user
//! dataset, checks a shared access token and answers filtered, sorted,
//! paginated searches.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::ServerConfig;
pub use dataset::{load_dataset, parse_dataset, Dataset, DatasetError};
pub use error::{Result, ServerError};
pub use services::{CredentialCheck, SearchQuery, StaticToken, UserDirectory};
pub use state::AppState;
