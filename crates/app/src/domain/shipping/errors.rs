//! Shipping errors.

use reqwest::StatusCode;
use storefront::{
    errors::{Categorized, ErrorCategory},
    money::MoneyConversionError,
    shipping::NoCarrierIds,
};
use thiserror::Error;

/// Errors raised while fetching shipping rates.
#[derive(Debug, Error)]
pub enum ShippingError {
    /// Carrier ids were empty after normalisation.
    #[error("no valid carrier ids configured")]
    NoCarrierIds(#[from] NoCarrierIds),

    /// Transport or decoding failure.
    #[error("http error")]
    Http(#[from] reqwest::Error),

    /// The rates provider returned a non-success status.
    #[error("rate request failed with status {0}: {1}")]
    UnexpectedStatus(StatusCode, String),

    /// The rates response carried no rates.
    #[error("rate response has no rates")]
    MissingRates,

    /// A quoted amount is not representable.
    #[error("invalid rate amount")]
    InvalidAmount(#[from] MoneyConversionError),
}

impl Categorized for ShippingError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::NoCarrierIds(_) => ErrorCategory::ConfigurationMissing,
            Self::Http(_)
            | Self::UnexpectedStatus(..)
            | Self::MissingRates
            | Self::InvalidAmount(_) => ErrorCategory::UpstreamUnavailable,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::NoCarrierIds(_) => "No valid carrier IDs found.",
            Self::MissingRates | Self::InvalidAmount(_) => "Invalid response format",
            Self::Http(_) | Self::UnexpectedStatus(..) => "Failed to fetch shipping rates",
        }
        .to_string()
    }
}
