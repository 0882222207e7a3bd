/// Server error types
use crate::dataset::DatasetError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use usersearch_core::protocol::{
    ERROR_BAD_ORDER_BY, ERROR_BAD_ORDER_FIELD, ERROR_OFFSET_TOO_LARGE,
};
use usersearch_core::ErrorBody;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad order field: {0}")]
    BadOrderField(String),

    #[error("Bad order direction: {0}")]
    BadOrderBy(String),

    #[error("Offset {offset} is past the {found} users found")]
    OffsetTooLarge { offset: usize, found: usize },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::BadOrderField(ref field) => {
                tracing::debug!(order_field = %field, "Rejected order field");
                (StatusCode::BAD_REQUEST, ERROR_BAD_ORDER_FIELD.to_string())
            }
            ServerError::BadOrderBy(ref value) => {
                tracing::debug!(order_by = %value, "Rejected order direction");
                (StatusCode::BAD_REQUEST, ERROR_BAD_ORDER_BY.to_string())
            }
            ServerError::OffsetTooLarge { offset, found } => {
                tracing::debug!(offset, found, "Rejected offset");
                (StatusCode::BAD_REQUEST, ERROR_OFFSET_TOO_LARGE.to_string())
            }
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Dataset(ref e) => {
                tracing::error!("Dataset error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Dataset error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error".to_string())
            }
        };

        (status, Json(ErrorBody::new(error_message))).into_response()
    }
}
