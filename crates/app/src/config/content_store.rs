//! Content store settings

use std::time::Duration;

use clap::Args;

use crate::content_store::ContentStoreConfig;

/// Content store connection settings.
#[derive(Debug, Clone, Args)]
pub struct ContentStoreArgs {
    /// Content store query endpoint
    #[arg(long, env = "CONTENT_STORE_QUERY_URL")]
    pub content_store_query_url: String,

    /// Content store read token
    #[arg(long, env = "CONTENT_STORE_TOKEN", hide_env_values = true)]
    pub content_store_token: Option<String>,

    /// Order write endpoint
    #[arg(long, env = "ORDERS_URL", default_value = "http://localhost:3000/api/order")]
    pub orders_url: String,

    /// Content store request timeout in seconds
    #[arg(long, env = "CONTENT_STORE_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub content_store_timeout_seconds: u64,
}

impl From<&ContentStoreArgs> for ContentStoreConfig {
    fn from(args: &ContentStoreArgs) -> Self {
        Self {
            query_url: args.content_store_query_url.clone(),
            token: args
                .content_store_token
                .as_deref()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            orders_url: args.orders_url.clone(),
            timeout: Duration::from_secs(args.content_store_timeout_seconds),
        }
    }
}
