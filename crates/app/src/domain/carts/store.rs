//! Session cart store.

use std::sync::Arc;

use storefront::{
    cart::{Cart, CartError, CartItem},
    money::Amount,
};
use tokio::sync::watch;
use tracing::{debug, warn};

/// The shopper's cart for one browsing session.
///
/// Clones share the same cart. Every change is published to all subscribers, so the
/// cart page and checkout summary always render the same contents.
#[derive(Debug, Clone)]
pub struct CartStore {
    sender: Arc<watch::Sender<Cart>>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Cart::default())
    }
}

impl CartStore {
    /// Create a store holding the given cart.
    #[must_use]
    pub fn new(cart: Cart) -> Self {
        let (sender, _) = watch::channel(cart);

        Self {
            sender: Arc::new(sender),
        }
    }

    /// Add an item, merging quantities for an id already in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CurrencyMismatch`] when the item is priced in another currency.
    pub fn add_item(&self, item: CartItem) -> Result<(), CartError> {
        let id = item.id.clone();
        let mut result = Ok(());

        let changed = self.sender.send_if_modified(|cart| match cart.add_item(item) {
            Ok(changed) => changed,
            Err(error) => {
                result = Err(error);
                false
            }
        });

        match &result {
            Ok(()) => debug!(item = %id, changed, "cart item added"),
            Err(error) => warn!(item = %id, %error, "cart item rejected"),
        }

        result
    }

    /// Set an item's quantity; zero removes the item. Unknown ids are ignored.
    pub fn update_quantity(&self, id: &str, quantity: u32) {
        let changed = self
            .sender
            .send_if_modified(|cart| cart.update_quantity(id, quantity));

        debug!(item = %id, quantity, changed, "cart quantity updated");
    }

    /// Remove an item. Unknown ids are ignored.
    pub fn remove_item(&self, id: &str) {
        let changed = self
            .sender
            .send_if_modified(|cart| cart.remove_item(id).is_some());

        debug!(item = %id, changed, "cart item removed");
    }

    /// Remove every item.
    pub fn clear(&self) {
        self.sender.send_if_modified(|cart| {
            let changed = !cart.is_empty();
            cart.clear();
            changed
        });

        debug!("cart cleared");
    }

    /// An independent copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.sender.borrow().snapshot()
    }

    /// Current items, cloned.
    pub fn items(&self) -> Vec<CartItem> {
        self.sender.borrow().items().to_vec()
    }

    /// Current subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] on overflow.
    pub fn subtotal(&self) -> Result<Amount, CartError> {
        self.sender.borrow().subtotal()
    }

    /// Current subtotal plus the given shipping cost.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] on overflow or currency mismatch.
    pub fn total(&self, shipping: Amount) -> Result<Amount, CartError> {
        self.sender.borrow().total(shipping)
    }

    /// Subscribe to cart changes.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso};
    use storefront::money::minor;
    use testresult::TestResult;

    use crate::test::cart_item;

    use super::*;

    #[tokio::test]
    async fn mutations_are_visible_to_every_clone_and_subscriber() -> TestResult {
        let store = CartStore::default();
        let checkout_view = store.clone();
        let mut cart_page = store.subscribe();

        store.add_item(cart_item("a", 10_00, 2))?;

        cart_page.changed().await?;

        assert_eq!(cart_page.borrow_and_update().len(), 1);
        assert_eq!(checkout_view.subtotal()?, minor(20_00));

        Ok(())
    }

    #[test]
    fn noop_mutations_do_not_notify() -> TestResult {
        let store = CartStore::default();
        store.add_item(cart_item("a", 10_00, 2))?;

        let mut subscriber = store.subscribe();

        store.remove_item("missing");
        store.update_quantity("missing", 3);
        store.update_quantity("a", 2);

        assert!(!subscriber.has_changed()?);

        store.update_quantity("a", 0);

        assert!(subscriber.has_changed()?);
        assert!(subscriber.borrow_and_update().is_empty());

        Ok(())
    }

    #[test]
    fn rejected_and_empty_adds_do_not_notify() -> TestResult {
        let store = CartStore::default();
        let mut subscriber = store.subscribe();

        let mut foreign = cart_item("b", 5_00, 1);
        foreign.price = Money::from_minor(5_00, iso::EUR);

        let result = store.add_item(foreign);

        assert!(
            matches!(result, Err(CartError::CurrencyMismatch(..))),
            "expected currency mismatch, got {result:?}"
        );

        store.add_item(cart_item("a", 10_00, 0))?;

        assert!(!subscriber.has_changed()?);
        assert!(store.snapshot().is_empty());

        Ok(())
    }

    #[test]
    fn snapshot_is_detached_from_the_store() -> TestResult {
        let store = CartStore::default();
        store.add_item(cart_item("a", 10_00, 2))?;

        let snapshot = store.snapshot();

        store.clear();

        assert_eq!(snapshot.len(), 1);
        assert!(store.items().is_empty());

        Ok(())
    }

    #[test]
    fn totals_follow_the_documented_scenario() -> TestResult {
        let store = CartStore::default();
        store.add_item(cart_item("a", 10_00, 2))?;
        store.add_item(cart_item("b", 5_00, 1))?;

        assert_eq!(store.subtotal()?, minor(25_00));
        assert_eq!(store.total(minor(6_00))?, minor(31_00));

        Ok(())
    }
}
