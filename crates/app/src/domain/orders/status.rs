//! Order status lookup for the order-completed page.

use std::sync::Arc;

use reqwest::Url;
use storefront::orders::{OrderId, OrderStatus};
use tracing::{debug, info};

use crate::domain::orders::{OrderStatusError, OrdersRepository};

/// Query parameter carrying the order id on the return URL.
pub const ORDER_ID_PARAM: &str = "orderId";

/// Extract a non-empty order id from a return URL.
pub fn order_id_from_url(url: &Url) -> Option<OrderId> {
    url.query_pairs()
        .find(|(name, _)| name == ORDER_ID_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(OrderId::new)
}

/// Looks up the status shown after the payment gateway returns.
#[derive(Clone)]
pub struct OrderStatusService {
    orders: Arc<dyn OrdersRepository>,
}

impl OrderStatusService {
    /// Create a status service over an orders repository.
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersRepository>) -> Self {
        Self { orders }
    }

    /// Read the status of one order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStatusError::NotFound`] when no order has the id, or
    /// [`OrderStatusError::Upstream`] when the store cannot be read.
    pub async fn get_order_status(&self, id: &OrderId) -> Result<OrderStatus, OrderStatusError> {
        let order = self
            .orders
            .get_order(id)
            .await?
            .ok_or_else(|| OrderStatusError::NotFound(id.clone()))?;

        info!(order_id = %id, "fetched order status");

        Ok(OrderStatus::from(order))
    }

    /// Look up the order named by a return URL. No id means no lookup.
    ///
    /// # Errors
    ///
    /// See [`OrderStatusService::get_order_status`].
    pub async fn lookup_from_url(
        &self,
        url: &Url,
    ) -> Result<Option<OrderStatus>, OrderStatusError> {
        let Some(id) = order_id_from_url(url) else {
            debug!("no order id in url");

            return Ok(None);
        };

        self.get_order_status(&id).await.map(Some)
    }
}
