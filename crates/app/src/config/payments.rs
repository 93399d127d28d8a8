//! Payment gateway settings

use std::time::Duration;

use clap::Args;

/// Payment gateway settings.
#[derive(Debug, Clone, Args)]
pub struct PaymentsConfig {
    /// Payment session endpoint
    #[arg(
        long,
        env = "PAYMENT_SESSION_URL",
        default_value = "http://localhost:3000/api/checkout-route"
    )]
    pub payment_session_url: String,

    /// Payment gateway publishable key
    #[arg(
        long,
        env = "PAYMENT_PUBLISHABLE_KEY",
        hide_env_values = true,
        default_value = ""
    )]
    pub publishable_key: String,

    /// Payment session request timeout in seconds
    #[arg(long, env = "PAYMENT_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub payment_timeout_seconds: u64,
}

impl PaymentsConfig {
    /// Payment session request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.payment_timeout_seconds)
    }
}
