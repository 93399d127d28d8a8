//! Pricing

use rusty_money::MoneyError;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    money::{Amount, minor},
};

/// Errors that can occur while pricing a cart or order.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// The cart could not be totalled.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Placeholder monetary constants applied until real shipping, tax and label costs exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPolicy {
    /// Flat shipping shown on the cart page before a rate is selected.
    pub placeholder_shipping: Amount,

    /// Fixed tax added at checkout.
    pub tax: Amount,

    /// Fixed shipping label fee added at checkout.
    pub label_fee: Amount,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            placeholder_shipping: minor(6_00),
            tax: minor(3_50),
            label_fee: minor(5_00),
        }
    }
}

impl PricingPolicy {
    /// Cart page total: subtotal plus the placeholder shipping.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] on arithmetic overflow or currency mismatch.
    pub fn provisional_total(&self, cart: &Cart) -> Result<Amount, PricingError> {
        Ok(cart.total(self.placeholder_shipping)?)
    }

    /// Checkout total: subtotal, selected shipping, tax and label fee.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] on currency mismatch.
    pub fn checkout_total(
        &self,
        subtotal: Amount,
        shipping: Amount,
    ) -> Result<Amount, PricingError> {
        let total = subtotal
            .add(shipping)?
            .add(self.tax)?
            .add(self.label_fee)?;

        Ok(total)
    }
}
