//! Core error types for user search
use thiserror::Error;

/// Result type alias using `ParseError`
pub type Result<T> = std::result::Result<T, ParseError>;

/// Failure to interpret a wire value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `order_field` is not one of `Id`, `Name`, `Age` or empty
    #[error("unknown order field: {0}")]
    OrderField(String),

    /// `order_by` is not one of `-1`, `0`, `1`
    #[error("unknown order direction: {0}")]
    OrderBy(String),
}
