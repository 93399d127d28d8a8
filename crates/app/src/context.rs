//! App Context

use std::sync::Arc;

use storefront::money::MoneyConversionError;
use thiserror::Error;
use tracing::warn;

use crate::{
    config::{ContentStoreArgs, PaymentsConfig, PricingConfig, ShippingConfig},
    content_store::{ContentStoreClient, ContentStoreError},
    domain::{
        carts::CartStore,
        checkout::{CheckoutError, CheckoutService},
        orders::{ContentStoreOrdersRepository, OrderStatusService, OrdersRepository},
        payments::{HttpPaymentSessionsClient, PaymentsError},
        products::{ContentStoreProductsService, ProductsService},
        shipping::{HttpShippingRatesClient, ShippingError, ShippingService},
    },
};

/// Failures wiring the application from config.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The content store client could not be built.
    #[error("failed to build content store client")]
    ContentStore(#[source] ContentStoreError),

    /// The shipping client could not be built.
    #[error("failed to build shipping client")]
    Shipping(#[source] ShippingError),

    /// The payments client could not be built.
    #[error("failed to build payments client")]
    Payments(#[source] PaymentsError),

    /// A configured fee is not a representable amount.
    #[error("invalid pricing configuration")]
    Pricing(#[source] MoneyConversionError),
}

/// Content-store backed services.
#[derive(Clone)]
pub struct StoreContext {
    /// Product catalog
    pub products: Arc<dyn ProductsService>,
    /// Order persistence
    pub orders: Arc<dyn OrdersRepository>,
    /// Order status lookup
    pub order_status: OrderStatusService,
}

impl StoreContext {
    /// Build the content store services.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_config(config: &ContentStoreArgs) -> Result<Self, AppInitError> {
        let client =
            ContentStoreClient::new(config.into()).map_err(AppInitError::ContentStore)?;

        let orders: Arc<dyn OrdersRepository> =
            Arc::new(ContentStoreOrdersRepository::new(client.clone()));

        Ok(Self {
            products: Arc::new(ContentStoreProductsService::new(client)),
            order_status: OrderStatusService::new(Arc::clone(&orders)),
            orders,
        })
    }
}

/// Build the shipping rate service.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built.
pub fn shipping_service(config: &ShippingConfig) -> Result<ShippingService, AppInitError> {
    let client = HttpShippingRatesClient::new(&config.shipping_rates_url, config.timeout())
        .map_err(AppInitError::Shipping)?;

    Ok(ShippingService::new(Arc::new(client), config.carrier_ids()))
}

/// Everything a checkout session needs.
#[derive(Clone)]
pub struct AppContext {
    /// Content store services
    pub store: StoreContext,
    /// Shipping rates
    pub shipping: ShippingService,
    /// Session cart
    pub cart: CartStore,
    checkout: Option<CheckoutService>,
}

impl AppContext {
    /// Build the full application context.
    ///
    /// A blank publishable key does not fail here; checkout itself is then unavailable.
    ///
    /// # Errors
    ///
    /// Returns an error when a client cannot be built or the fees are invalid.
    pub fn from_config(
        content_store: &ContentStoreArgs,
        shipping: &ShippingConfig,
        payments: &PaymentsConfig,
        pricing: &PricingConfig,
    ) -> Result<Self, AppInitError> {
        let store = StoreContext::from_config(content_store)?;
        let policy = pricing.policy().map_err(AppInitError::Pricing)?;

        let sessions =
            HttpPaymentSessionsClient::new(&payments.payment_session_url, payments.timeout())
                .map_err(AppInitError::Payments)?;

        let checkout = CheckoutService::new(
            Arc::clone(&store.orders),
            Arc::new(sessions),
            policy,
            &payments.publishable_key,
        )
        .inspect_err(|error| warn!("checkout unavailable: {error}"))
        .ok();

        Ok(Self {
            shipping: shipping_service(shipping)?,
            cart: CartStore::default(),
            checkout,
            store,
        })
    }

    /// The checkout pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingPublishableKey`] when no publishable key is configured.
    pub fn checkout(&self) -> Result<&CheckoutService, CheckoutError> {
        self.checkout
            .as_ref()
            .ok_or(CheckoutError::MissingPublishableKey)
    }
}
