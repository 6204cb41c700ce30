//! Client Error Types
//!
//! Failures that are not plain HTTP status errors. A non-2xx response is
//! never an error here: it is logged and reported as `None`.

/// Client error type
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Response is missing field `{0}`")]
    MissingField(String),

    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),
}

/// Client result alias
pub type ClientResult<T> = Result<T, ClientError>;
