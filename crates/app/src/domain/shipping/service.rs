//! Shipping rate lookup.

use std::sync::Arc;

use storefront::shipping::{CarrierIds, RateQuery, RateSelection};
use tracing::{info, warn};

use crate::domain::shipping::{ShippingError, ShippingRatesClient};

/// Fetches rates from the configured carriers.
#[derive(Clone)]
pub struct ShippingService {
    client: Arc<dyn ShippingRatesClient>,
    carrier_ids: Vec<Option<String>>,
}

impl ShippingService {
    /// Create a service; `carrier_ids` are the raw configured slots.
    #[must_use]
    pub fn new(client: Arc<dyn ShippingRatesClient>, carrier_ids: Vec<Option<String>>) -> Self {
        Self {
            client,
            carrier_ids,
        }
    }

    /// Fetch rates for a shipment; nothing is selected in the returned set.
    ///
    /// # Errors
    ///
    /// Returns [`ShippingError::NoCarrierIds`] without making a request when no carrier
    /// id is configured, or the client's error when the request fails.
    pub async fn fetch_rates(&self, query: &RateQuery) -> Result<RateSelection, ShippingError> {
        let carriers = CarrierIds::from_configured(self.carrier_ids.iter().map(Option::as_deref))
            .inspect_err(|_| warn!("no valid carrier ids configured"))?;

        let rates = self.client.get_rates(query, &carriers).await?;

        info!(count = rates.len(), "fetched shipping rates");

        Ok(RateSelection::new(rates))
    }
}
