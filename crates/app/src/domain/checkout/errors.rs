//! Checkout errors.

use storefront::{
    errors::{Categorized, ErrorCategory},
    orders::OrderId,
    pricing::PricingError,
};
use thiserror::Error;

use crate::domain::{orders::OrdersError, payments::PaymentsError};

/// Terminal failures of a checkout submission.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No shipping rate was selected.
    #[error("no shipping rate selected")]
    NoRateSelected,

    /// The cart or order total does not fit.
    #[error("order cannot be totalled")]
    Pricing(#[from] PricingError),

    /// The order could not be persisted.
    #[error("failed to save order")]
    OrderPersistFailed(#[source] OrdersError),

    /// The order was saved but no payment session was opened.
    #[error("failed to create payment session for order {order_id}")]
    PaymentSessionFailed {
        order_id: OrderId,
        #[source]
        source: PaymentsError,
    },

    /// The gateway publishable key is absent.
    #[error("payment gateway publishable key is not configured")]
    MissingPublishableKey,

    /// Another submission has not finished.
    #[error("a checkout submission is already in progress")]
    SubmissionInFlight,
}

impl Categorized for CheckoutError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::NoRateSelected | Self::SubmissionInFlight => ErrorCategory::Validation,
            Self::Pricing(_) | Self::OrderPersistFailed(_) | Self::PaymentSessionFailed { .. } => {
                ErrorCategory::UpstreamUnavailable
            }
            Self::MissingPublishableKey => ErrorCategory::ConfigurationMissing,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::NoRateSelected => "Please select a shipping rate.",
            Self::SubmissionInFlight => "Your order is already being processed.",
            Self::MissingPublishableKey => "Payments are not configured.",
            Self::Pricing(_) | Self::OrderPersistFailed(_) | Self::PaymentSessionFailed { .. } => {
                "Failed to process checkout. Please try again."
            }
        }
        .to_string()
    }
}
