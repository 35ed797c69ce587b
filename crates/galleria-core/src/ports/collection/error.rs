//! Error types for collection port operations.

use thiserror::Error;

/// Errors from collection port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these at
/// the adapter boundary.
#[derive(Debug, Clone, Error)]
pub enum CollectionError {
    /// The API returned a non-success HTTP status.
    #[error("Collection API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Collection API request timed out: {url}")]
    Timeout {
        /// The URL that was requested
        url: String,
    },

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The API returned a response the adapter could not interpret.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },
}

/// Result type alias for collection port operations.
pub type CollectionResult<T> = Result<T, CollectionError>;
