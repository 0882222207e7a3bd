/// Server services
pub mod credentials;
pub mod directory;

pub use credentials::{CredentialCheck, StaticToken};
pub use directory::{SearchQuery, UserDirectory};
