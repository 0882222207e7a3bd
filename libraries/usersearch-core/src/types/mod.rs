//! Domain types carried over the wire

mod order;
mod search;
mod user;

pub use order::{OrderBy, OrderField};
pub use search::{SearchRequest, SearchResponse};
pub use user::User;
