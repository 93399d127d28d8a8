//! Shipping rate HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront::{
    money::{CURRENCY, from_decimal},
    shipping::{CarrierIds, RateQuery, ShipmentAddress, ShippingRate},
};

use crate::domain::shipping::ShippingError;

/// Quotes shipping rates for a parcel.
#[automock]
#[async_trait]
pub trait ShippingRatesClient: Send + Sync {
    /// Request rates for the given shipment from the given carriers.
    async fn get_rates(
        &self,
        query: &RateQuery,
        carriers: &CarrierIds,
    ) -> Result<Vec<ShippingRate>, ShippingError>;
}

/// Rate-quoting endpoint client.
#[derive(Debug, Clone)]
pub struct HttpShippingRatesClient {
    url: String,
    http: Client,
}

impl HttpShippingRatesClient {
    /// Create a client posting to `url`, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ShippingError> {
        Ok(Self {
            url: url.into(),
            http: Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait]
impl ShippingRatesClient for HttpShippingRatesClient {
    async fn get_rates(
        &self,
        query: &RateQuery,
        carriers: &CarrierIds,
    ) -> Result<Vec<ShippingRate>, ShippingError> {
        let body = RatesRequest {
            from: AddressBody::from(&query.from),
            to: AddressBody::from(&query.to),
            weight: query.weight_lbs,
            rate_options: RateOptions {
                carrier_ids: carriers.as_slice(),
            },
        };

        let response = self.http.post(&self.url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ShippingError::UnexpectedStatus(status, text));
        }

        let parsed: RatesResponse = response.json().await?;

        parsed
            .rate_response
            .and_then(|body| body.rates)
            .ok_or(ShippingError::MissingRates)?
            .into_iter()
            .map(ShippingRate::try_from)
            .collect()
    }
}

#[derive(Debug, Serialize)]
struct RatesRequest<'a> {
    from: AddressBody<'a>,
    to: AddressBody<'a>,
    weight: u32,
    rate_options: RateOptions<'a>,
}

#[derive(Debug, Serialize)]
struct AddressBody<'a> {
    name: &'a str,
    phone: &'a str,
    address_line1: &'a str,
    city_locality: &'a str,
    state_province: &'a str,
    postal_code: &'a str,
    country_code: &'a str,
}

impl<'a> From<&'a ShipmentAddress> for AddressBody<'a> {
    fn from(address: &'a ShipmentAddress) -> Self {
        Self {
            name: &address.name,
            phone: &address.phone,
            address_line1: &address.address_line1,
            city_locality: &address.city_locality,
            state_province: &address.state_province,
            postal_code: &address.postal_code,
            country_code: &address.country_code,
        }
    }
}

#[derive(Debug, Serialize)]
struct RateOptions<'a> {
    carrier_ids: &'a [String],
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rate_response: Option<RateResponseBody>,
}

#[derive(Debug, Deserialize)]
struct RateResponseBody {
    rates: Option<Vec<RateRecord>>,
}

#[derive(Debug, Deserialize)]
struct RateRecord {
    rate_id: String,
    service_type: String,
    shipping_amount: AmountRecord,
    estimated_delivery_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AmountRecord {
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
}

impl TryFrom<RateRecord> for ShippingRate {
    type Error = ShippingError;

    fn try_from(record: RateRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: from_decimal(record.shipping_amount.amount, CURRENCY)?,
            rate_id: record.rate_id,
            service_type: record.service_type,
            estimated_delivery_date: record.estimated_delivery_date.unwrap_or_default(),
        })
    }
}
