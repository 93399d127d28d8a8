//! Payment session HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront::{
    money::{Amount, to_decimal},
    orders::{OrderId, OrderLine},
};

use crate::domain::payments::PaymentsError;

/// What the payment gateway needs to open a hosted checkout for an order.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSessionRequest {
    /// Order the session pays for
    pub order_id: OrderId,

    /// Ordered lines
    pub lines: Vec<OrderLine>,

    /// Label fee
    pub label_price: Amount,

    /// Shipping cost
    pub shipping_rate: Amount,

    /// Tax
    pub tax: Amount,
}

/// A payment session opened by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSession {
    /// Session token consumed by the gateway's redirect.
    pub id: String,
}

/// Opens payment sessions.
#[automock]
#[async_trait]
pub trait PaymentSessionsClient: Send + Sync {
    /// Open a payment session for a persisted order.
    async fn create_session(
        &self,
        request: &PaymentSessionRequest,
    ) -> Result<PaymentSession, PaymentsError>;
}

/// Payment session endpoint client.
#[derive(Debug, Clone)]
pub struct HttpPaymentSessionsClient {
    url: String,
    http: Client,
}

impl HttpPaymentSessionsClient {
    /// Create a client posting to `url`, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, PaymentsError> {
        Ok(Self {
            url: url.into(),
            http: Client::builder().timeout(timeout).build()?,
        })
    }
}

#[async_trait]
impl PaymentSessionsClient for HttpPaymentSessionsClient {
    async fn create_session(
        &self,
        request: &PaymentSessionRequest,
    ) -> Result<PaymentSession, PaymentsError> {
        let body = SessionBody::from(request);

        let response = self.http.post(&self.url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PaymentsError::UnexpectedStatus(status, text));
        }

        let parsed: SessionResponse = response.json().await?;

        match parsed.id {
            Some(id) if !id.trim().is_empty() => Ok(PaymentSession { id }),
            _ => Err(PaymentsError::MissingSessionId),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionBody<'a> {
    cart_items: Vec<SessionLine<'a>>,
    order_id: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    label_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    shipping_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    tax: Decimal,
}

#[derive(Debug, Serialize)]
struct SessionLine<'a> {
    id: &'a str,
    name: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    quantity: u32,
}

impl<'a> From<&'a PaymentSessionRequest> for SessionBody<'a> {
    fn from(request: &'a PaymentSessionRequest) -> Self {
        Self {
            cart_items: request
                .lines
                .iter()
                .map(|line| SessionLine {
                    id: &line.id,
                    name: &line.name,
                    price: to_decimal(&line.price),
                    quantity: line.quantity,
                })
                .collect(),
            order_id: request.order_id.as_str(),
            label_price: to_decimal(&request.label_price),
            shipping_rate: to_decimal(&request.shipping_rate),
            tax: to_decimal(&request.tax),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    id: Option<String>,
}
