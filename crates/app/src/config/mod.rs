//! Storefront configuration
//!
//! Each group is a flattenable set of `clap` arguments backed by environment variables,
//! so a command only asks for the settings it uses.

mod content_store;
mod logging;
mod payments;
mod pricing;
mod shipping;

pub use content_store::ContentStoreArgs;
pub use logging::{LogFormat, LoggingConfig};
pub use payments::PaymentsConfig;
pub use pricing::PricingConfig;
pub use shipping::ShippingConfig;

/// Load `.env` into the process environment, if present.
pub fn load_dotenv() {
    _ = dotenvy::dotenv();
}
