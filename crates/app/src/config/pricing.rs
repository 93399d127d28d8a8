//! Checkout fee settings

use clap::Args;
use rust_decimal::Decimal;
use storefront::{
    money::{CURRENCY, MoneyConversionError, from_decimal},
    pricing::PricingPolicy,
};

/// Placeholder fees applied until real tax and label services exist.
#[derive(Debug, Clone, Args)]
pub struct PricingConfig {
    /// Shipping estimate shown before a rate is chosen
    #[arg(long, env = "PLACEHOLDER_SHIPPING", default_value = "6.00")]
    pub placeholder_shipping: Decimal,

    /// Flat tax added at checkout
    #[arg(long, env = "TAX", default_value = "3.50")]
    pub tax: Decimal,

    /// Flat shipping label fee added at checkout
    #[arg(long, env = "LABEL_FEE", default_value = "5.00")]
    pub label_fee: Decimal,
}

impl PricingConfig {
    /// Build the pricing policy in the store currency.
    ///
    /// # Errors
    ///
    /// Returns an error if a fee cannot be represented in minor units.
    pub fn policy(&self) -> Result<PricingPolicy, MoneyConversionError> {
        Ok(PricingPolicy {
            placeholder_shipping: from_decimal(self.placeholder_shipping, CURRENCY)?,
            tax: from_decimal(self.tax, CURRENCY)?,
            label_fee: from_decimal(self.label_fee, CURRENCY)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use storefront::money::minor;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        pricing: PricingConfig,
    }

    #[test]
    fn defaults_match_placeholder_policy() -> TestResult {
        let harness = Harness::try_parse_from(["test"])?;

        assert_eq!(harness.pricing.policy()?, PricingPolicy::default());

        Ok(())
    }

    #[test]
    fn fees_are_overridable() -> TestResult {
        let harness = Harness::try_parse_from(["test", "--tax", "4.25", "--label-fee", "0"])?;
        let policy = harness.pricing.policy()?;

        assert_eq!(policy.tax, minor(4_25));
        assert_eq!(policy.label_fee, minor(0));

        Ok(())
    }
}
