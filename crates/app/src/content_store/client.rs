//! Content store HTTP client.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use storefront::orders::OrderId;

use crate::content_store::ContentStoreError;

/// Configuration for connecting to the content store.
#[derive(Debug, Clone)]
pub struct ContentStoreConfig {
    /// Query endpoint, e.g. `"https://<project>.api.sanity.io/v2023-01-01/data/query/production"`.
    pub query_url: String,

    /// Optional read token.
    pub token: Option<String>,

    /// Order write endpoint.
    pub orders_url: String,

    /// Request timeout.
    pub timeout: Duration,
}

/// HTTP client for content store queries and order writes.
#[derive(Debug, Clone)]
pub struct ContentStoreClient {
    config: ContentStoreConfig,
    http: Client,
}

impl ContentStoreClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ContentStoreConfig) -> Result<Self, ContentStoreError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    /// Run a query, binding each `(name, value)` parameter as `$name`.
    ///
    /// Returns the deserialized `result` member of the response.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ContentStoreError> {
        let mut pairs = vec![("query".to_string(), query.to_string())];

        for (name, value) in params {
            pairs.push((format!("${name}"), serde_json::Value::from(*value).to_string()));
        }

        let request = self.authorize(self.http.get(&self.config.query_url).query(&pairs));

        let response = ensure_success(request.send().await?, "query").await?;

        let parsed: QueryResponse<T> = response.json().await?;

        Ok(parsed.result)
    }

    /// Write a new order document, returning the id the store assigned.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn create_order<D: Serialize + Sync>(
        &self,
        document: &D,
    ) -> Result<OrderId, ContentStoreError> {
        let request = self.authorize(self.http.post(&self.config.orders_url).json(document));

        let response = ensure_success(request.send().await?, "create order").await?;

        let parsed: CreateOrderResponse = response.json().await?;

        Ok(OrderId::new(parsed.order_id))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

async fn ensure_success(response: Response, action: &str) -> Result<Response, ContentStoreError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(ContentStoreError::UnexpectedResponse(format!(
        "{action} request failed with status {status}: {text}"
    )))
}

#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderResponse {
    order_id: String,
}
