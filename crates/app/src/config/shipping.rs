//! Shipping settings

use std::time::Duration;

use clap::Args;

/// Shipping rate provider settings.
#[derive(Debug, Clone, Args)]
pub struct ShippingConfig {
    /// Shipping rate endpoint
    #[arg(
        long,
        env = "SHIPPING_RATES_URL",
        default_value = "http://localhost:3000/api/shipengine/getRates"
    )]
    pub shipping_rates_url: String,

    /// First carrier id
    #[arg(long, env = "SHIPENGINE_FIRST_CARRIER_ID")]
    pub first_carrier_id: Option<String>,

    /// Second carrier id
    #[arg(long, env = "SHIPENGINE_SECOND_CARRIER_ID")]
    pub second_carrier_id: Option<String>,

    /// Third carrier id
    #[arg(long, env = "SHIPENGINE_THIRD_CARRIER_ID")]
    pub third_carrier_id: Option<String>,

    /// Fourth carrier id
    #[arg(long, env = "SHIPENGINE_FOURTH_CARRIER_ID")]
    pub fourth_carrier_id: Option<String>,

    /// Rate request timeout in seconds
    #[arg(long, env = "SHIPPING_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub shipping_timeout_seconds: u64,
}

impl ShippingConfig {
    /// The four carrier id slots, as configured.
    #[must_use]
    pub fn carrier_ids(&self) -> Vec<Option<String>> {
        vec![
            self.first_carrier_id.clone(),
            self.second_carrier_id.clone(),
            self.third_carrier_id.clone(),
            self.fourth_carrier_id.clone(),
        ]
    }

    /// Rate request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.shipping_timeout_seconds)
    }
}
