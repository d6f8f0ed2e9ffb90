//! Error types shared by the fetch layer and both widgets.

use thiserror::Error;

/// Failure of a single HTTP JSON request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    /// Non-success status. Displays as the bare code, so the results banner
    /// reads `Error: 404`.
    #[error("{0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Errors a widget reports back to the caller of an operation.
#[derive(Debug, Error, PartialEq)]
pub enum WidgetError {
    #[error("No result item with key {0}")]
    UnknownItem(String),
}

pub type FetchResult<T> = Result<T, FetchError>;
