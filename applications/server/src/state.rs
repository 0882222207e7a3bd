/// Shared application state
use crate::services::{CredentialCheck, UserDirectory};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<UserDirectory>,
    pub credentials: Arc<dyn CredentialCheck>,
}

impl AppState {
    pub fn new(directory: Arc<UserDirectory>, credentials: Arc<dyn CredentialCheck>) -> Self {
        Self {
            directory,
            credentials,
        }
    }
}
