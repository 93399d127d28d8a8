//! Order storage errors.

use storefront::{
    errors::{Categorized, ErrorCategory},
    orders::OrderId,
};
use thiserror::Error;

use crate::content_store::ContentStoreError;

/// Errors raised by the order repository.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// The content store request failed.
    #[error("content store error")]
    ContentStore(#[from] ContentStoreError),
}

/// Errors raised while looking up an order's status.
#[derive(Debug, Error)]
pub enum OrderStatusError {
    /// No order has this id.
    #[error("order {0} not found")]
    NotFound(OrderId),

    /// The stored order document could not be read.
    #[error("failed to read order")]
    Upstream(#[from] OrdersError),
}

impl Categorized for OrderStatusError {
    fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound(_) => ErrorCategory::NotFound,
            Self::Upstream(_) => ErrorCategory::UpstreamUnavailable,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Order not found.",
            Self::Upstream(_) => "Failed to fetch order status.",
        }
        .to_string()
    }
}
