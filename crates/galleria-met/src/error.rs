//! Internal error types for collection API operations.
//!
//! These errors are internal to `galleria-met` and are mapped to the
//! core port errors at the boundary.

use thiserror::Error;

/// Result type alias for collection API operations.
pub type MetResult<T> = Result<T, MetError>;

/// Errors related to collection API operations.
#[derive(Debug, Error)]
pub enum MetError {
    /// API request completed with a non-success HTTP status.
    #[error("Collection API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The request exceeded its per-endpoint timeout.
    #[error("Collection API request timed out after {timeout_secs}s: {url}")]
    Timeout {
        /// Configured timeout in seconds
        timeout_secs: u64,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
