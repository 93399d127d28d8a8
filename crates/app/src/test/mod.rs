//! Test helpers

use std::time::Duration;

use storefront::{
    cart::CartItem, checkout::CustomerDetails, money::minor, shipping::ShippingRate,
};
use wiremock::MockServer;

use crate::content_store::{ContentStoreClient, ContentStoreConfig, ContentStoreError};

/// A content store client pointed at a mock server.
pub(crate) fn content_store_client(
    server: &MockServer,
) -> Result<ContentStoreClient, ContentStoreError> {
    ContentStoreClient::new(ContentStoreConfig {
        query_url: format!("{}/query", server.uri()),
        token: None,
        orders_url: format!("{}/api/order", server.uri()),
        timeout: Duration::from_secs(5),
    })
}

pub(crate) fn cart_item(id: &str, price: i64, quantity: u32) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: format!("Product {id}"),
        price: minor(price),
        quantity,
        color: Some("#FF8CB8".to_string()),
        size: None,
        image: format!("https://cdn.example.com/{id}.png"),
    }
}

pub(crate) fn shipping_rate(rate_id: &str, amount: i64) -> ShippingRate {
    ShippingRate {
        rate_id: rate_id.to_string(),
        service_type: "ups_ground".to_string(),
        amount: minor(amount),
        estimated_delivery_date: "2026-10-20T00:00:00Z".to_string(),
    }
}

pub(crate) fn customer() -> CustomerDetails {
    CustomerDetails {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 Analytical Row".to_string(),
        apartment: None,
        city: "London".to_string(),
        country: "GB".to_string(),
        postal_code: "NW1 6XE".to_string(),
        save_info: false,
    }
}
