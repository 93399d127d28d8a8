//! Product catalog query.

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use storefront::catalog::Product;
use tracing::{error, info, warn};

use crate::content_store::{
    ContentStoreClient, ContentStoreError,
    records::PRODUCTS_QUERY,
};

/// Catalog read from the content store.
#[derive(Debug, Clone)]
pub struct ContentStoreProductsService {
    client: ContentStoreClient,
}

impl ContentStoreProductsService {
    /// Create a products service over a content store client.
    #[must_use]
    pub fn new(client: ContentStoreClient) -> Self {
        Self { client }
    }

    /// Product documents, left undecoded so one bad document cannot hide the rest.
    async fn query_products(&self) -> Result<Vec<Value>, ContentStoreError> {
        self.client
            .query::<Option<Vec<Value>>>(PRODUCTS_QUERY, &[])
            .await
            .map(Option::unwrap_or_default)
    }
}

#[async_trait]
impl ProductsService for ContentStoreProductsService {
    async fn fetch_products(&self) -> Vec<Product> {
        let records = match self.query_products().await {
            Ok(records) => records,
            Err(source) => {
                error!("failed to fetch products: {source}");

                return Vec::new();
            }
        };

        let products: Vec<Product> = records
            .into_iter()
            .filter_map(|document| {
                let id = document
                    .get("_id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();

                Product::try_from(document)
                    .inspect_err(|source| warn!(product = %id, "skipping product: {source}"))
                    .ok()
            })
            .collect();

        info!(count = products.len(), "fetched products");

        products
    }
}

/// Source of catalog products.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Fetch the whole catalog. Failures are logged and yield an empty catalog.
    async fn fetch_products(&self) -> Vec<Product>;
}
