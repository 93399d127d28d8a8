//! Content store errors.

use thiserror::Error;

/// Errors that can occur when communicating with the content store.
#[derive(Debug, Error)]
pub enum ContentStoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The content store returned a non-2xx response.
    #[error("unexpected response from content store: {0}")]
    UnexpectedResponse(String),
}
