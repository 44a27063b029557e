//! Error types for fetching and mounting the transfer view.

use thiserror::Error;

/// Failure of a single fetch cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built for the configured endpoint.
    #[error("Invalid endpoint configuration: {0}")]
    InvalidEndpoint(String),

    /// Connection refused, timeout, or another transport failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The indexer answered with a non-success status.
    #[error("Indexer returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not a JSON array of transfers.
    #[error("Failed to decode transfers: {0}")]
    Decode(#[from] serde_json::Error),

    /// The view was torn down before the response arrived.
    #[error("Fetch cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// Failure to attach the rendered table to its container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("Unsupported container selector '{0}': only id selectors like '#transfer-list' are supported")]
    UnsupportedSelector(String),
}
