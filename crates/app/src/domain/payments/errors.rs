//! Payment session errors.

use reqwest::StatusCode;
use storefront::errors::{Categorized, ErrorCategory};
use thiserror::Error;

/// Errors raised while creating a payment session.
#[derive(Debug, Error)]
pub enum PaymentsError {
    /// Transport or decoding failure.
    #[error("http error")]
    Http(#[from] reqwest::Error),

    /// The gateway route returned a non-success status.
    #[error("payment session request failed with status {0}: {1}")]
    UnexpectedStatus(StatusCode, String),

    /// The gateway response carried no session id.
    #[error("payment session response has no id")]
    MissingSessionId,
}

impl Categorized for PaymentsError {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::UpstreamUnavailable
    }

    fn user_message(&self) -> String {
        "Failed to create payment session.".to_string()
    }
}
