//! Error types for the counting service client.

use thiserror::Error;

/// A failed fetch.
///
/// Every variant collapses into the same rejected outcome for the store;
/// the distinction only matters for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint could not be turned into a request URL
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Connection, timeout, or other transport failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Counting service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not `{"data": <integer>}`
    #[error("Malformed response: {0}")]
    Payload(String),
}
