//! User Search Core
//!
//! Wire-level types shared by the user search client and the reference
//! search server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `SearchRequest`, `SearchResponse`
//! - **Ordering**: `OrderField` and `OrderBy`, with their wire encodings
//! - **Protocol**: header names, sentinel strings and the error body shape
//!
//! # Example
//!
//! ```rust
//! use usersearch_core::{OrderBy, SearchRequest};
//!
//! let request = SearchRequest::new("ill")
//!     .with_limit(3)
//!     .with_offset(4)
//!     .order_by("Age", OrderBy::Desc);
//!
//! assert_eq!(request.order_field, "Age");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod protocol;
pub mod types;

pub use error::{ParseError, Result};
pub use protocol::ErrorBody;
pub use types::{OrderBy, OrderField, SearchRequest, SearchResponse, User};
