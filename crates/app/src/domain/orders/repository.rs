//! Order persistence.

use async_trait::async_trait;
use mockall::automock;
use storefront::orders::{NewOrder, OrderId, StoredOrder};

use crate::{
    content_store::{
        ContentStoreClient,
        records::{ORDER_BY_ID_QUERY, OrderDocument, OrderRecord},
    },
    domain::orders::OrdersError,
};

/// Order documents in the content store.
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persist a new order, returning the id the store assigned.
    async fn create_order(&self, order: &NewOrder) -> Result<OrderId, OrdersError>;

    /// Read an order back by id.
    async fn get_order(&self, id: &OrderId) -> Result<Option<StoredOrder>, OrdersError>;
}

/// Orders stored in the content store.
#[derive(Debug, Clone)]
pub struct ContentStoreOrdersRepository {
    client: ContentStoreClient,
}

impl ContentStoreOrdersRepository {
    /// Create a repository over a content store client.
    #[must_use]
    pub fn new(client: ContentStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrdersRepository for ContentStoreOrdersRepository {
    async fn create_order(&self, order: &NewOrder) -> Result<OrderId, OrdersError> {
        let document = OrderDocument::from(order);

        Ok(self.client.create_order(&document).await?)
    }

    async fn get_order(&self, id: &OrderId) -> Result<Option<StoredOrder>, OrdersError> {
        let record: Option<OrderRecord> = self
            .client
            .query(ORDER_BY_ID_QUERY, &[("orderId", id.as_str())])
            .await?;

        Ok(record.map(StoredOrder::from))
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use serde_json::json;
    use storefront::{cart::Cart, pricing::PricingPolicy};
    use testresult::TestResult;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, method, path, query_param},
    };

    use crate::test::{cart_item, content_store_client, customer, shipping_rate};

    use super::*;

    #[tokio::test]
    async fn create_order_posts_document_and_returns_id() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/order"))
            .and(body_partial_json(json!({
                "firstName": "Ada",
                "cartItems": [{ "id": "a", "quantity": 2 }],
                "total": 45.5,
                "trackingStatus": { "status": "Processing" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "orderId": "order-9" })))
            .expect(1)
            .mount(&server)
            .await;

        let mut cart = Cart::default();
        cart.add_item(cart_item("a", 10_00, 2))?;
        cart.add_item(cart_item("b", 5_00, 1))?;

        let order = NewOrder::compose(
            customer(),
            &cart,
            &shipping_rate("se-1", 12_00),
            &PricingPolicy::default(),
            Timestamp::UNIX_EPOCH,
        )?;

        let repository = ContentStoreOrdersRepository::new(content_store_client(&server)?);

        assert_eq!(repository.create_order(&order).await?, OrderId::new("order-9"));

        Ok(())
    }

    #[tokio::test]
    async fn get_order_binds_id_and_maps_record() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/query"))
            .and(query_param("$orderId", "\"order-1\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": {
                    "_id": "order-1",
                    "address": "12 Analytical Row",
                    "city": "London",
                    "country": "GB",
                    "postalCode": "NW1 6XE",
                    "trackingStatus": { "status": "Shipped", "estimatedDelivery": "2026-10-20" },
                    "shippingLabel": { "trackingNumber": "TRK1", "labelUrl": null }
                }
            })))
            .mount(&server)
            .await;

        let repository = ContentStoreOrdersRepository::new(content_store_client(&server)?);

        let order = repository.get_order(&OrderId::new("order-1")).await?;

        let Some(order) = order else {
            panic!("expected an order");
        };

        assert_eq!(order.city, "London");
        assert_eq!(
            order.tracking_status.and_then(|tracking| tracking.status).as_deref(),
            Some("Shipped")
        );
        assert_eq!(
            order.shipping_label.and_then(|label| label.tracking_number).as_deref(),
            Some("TRK1")
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_order_reads_as_none() -> TestResult {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": null })))
            .mount(&server)
            .await;

        let repository = ContentStoreOrdersRepository::new(content_store_client(&server)?);

        assert!(repository.get_order(&OrderId::new("missing-1")).await?.is_none());

        Ok(())
    }
}
