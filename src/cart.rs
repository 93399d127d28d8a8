//! Cart

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::money::{Amount, CURRENCY};

/// Errors related to cart contents or totals.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// An item's currency differs from the cart currency (item id, item currency, cart currency).
    #[error("Item {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// A line total does not fit in the currency's minor units.
    #[error("line total for item {0} overflows")]
    Overflow(String),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A product line in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Product identifier, unique within a cart.
    pub id: String,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Amount,

    /// Number of units, at least one while the item is in a cart.
    pub quantity: u32,

    /// Selected colour
    pub color: Option<String>,

    /// Selected size
    pub size: Option<String>,

    /// Product image URL
    pub image: String,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the line total does not fit in minor units.
    pub fn line_total(&self) -> Result<Amount, CartError> {
        let units = self
            .price
            .to_minor_units()
            .checked_mul(i64::from(self.quantity))
            .ok_or_else(|| CartError::Overflow(self.id.clone()))?;

        Ok(Money::from_minor(units, self.price.currency()))
    }
}

/// Cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: &'static Currency,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(CURRENCY)
    }
}

impl Cart {
    /// Create an empty cart in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add an item, merging its quantity into an existing line with the same id.
    ///
    /// A merged line keeps the unit price it was first added at. Adding zero units
    /// leaves the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] if the item is priced in another currency.
    pub fn add_item(&mut self, item: CartItem) -> Result<bool, CartError> {
        let item_currency = item.price.currency();

        if item_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                item.id,
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if item.quantity == 0 {
            return Ok(false);
        }

        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }

        Ok(true)
    }

    /// Set the quantity of an item; zero removes it. Unknown ids are ignored.
    ///
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(id).is_some();
        }

        match self.items.iter_mut().find(|line| line.id == id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            Some(_) | None => false,
        }
    }

    /// Remove an item, returning it if it was present.
    pub fn remove_item(&mut self, id: &str) -> Option<CartItem> {
        let position = self.items.iter().position(|line| line.id == id)?;

        Some(self.items.remove(position))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Find an item by id.
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|line| line.id == id)
    }

    /// Sum of price × quantity over every line.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] on overflow or money arithmetic failure.
    pub fn subtotal(&self) -> Result<Amount, CartError> {
        self.items
            .iter()
            .try_fold(Money::from_minor(0, self.currency), |acc, item| {
                Ok(acc.add(item.line_total()?)?)
            })
    }

    /// Subtotal plus the given shipping cost.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] on overflow or currency mismatch.
    pub fn total(&self, shipping: Amount) -> Result<Amount, CartError> {
        Ok(self.subtotal()?.add(shipping)?)
    }

    /// An independent copy of the cart as it is now.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
