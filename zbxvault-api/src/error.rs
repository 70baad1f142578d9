//! Error types for the API client.

use thiserror::Error;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur when talking to the platform API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failed. Fatal for a run: nothing is listed,
    /// exported or written after this.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Transport-level failure (connect, timeout, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Http(u16),

    /// The endpoint answered with a JSON-RPC error object.
    #[error("API error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<String>,
    },

    /// The export payload failed its second parse step.
    #[error("malformed export payload: {0}")]
    MalformedExport(String),

    /// The response parsed but did not have the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
