//! Orders
//!
//! [`NewOrder`] is composed at checkout from validated customer details, a snapshot of
//! the cart and the selected shipping rate. Once composed it shares nothing with the
//! live cart. [`OrderStatus`] is the read side shown after the payment gateway returns.

use std::fmt;

use jiff::Timestamp;

use crate::{
    cart::Cart,
    checkout::CustomerDetails,
    money::Amount,
    pricing::{PricingError, PricingPolicy},
    shipping::ShippingRate,
};

/// Content store assigned order id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Wrap an id returned by the content store.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A cart line frozen into an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Product id
    pub id: String,

    /// Product name at the time of ordering
    pub name: String,

    /// Unit price
    pub price: Amount,

    /// Units ordered
    pub quantity: u32,
}

/// The selected shipping rate frozen into an order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingRateSnapshot {
    /// Provider-assigned rate id
    pub rate_id: String,

    /// Carrier service
    pub service_type: String,

    /// Quoted shipping cost
    pub cost: Amount,

    /// Estimated delivery date as quoted
    pub estimated_delivery: String,
}

impl From<&ShippingRate> for ShippingRateSnapshot {
    fn from(rate: &ShippingRate) -> Self {
        Self {
            rate_id: rate.rate_id.clone(),
            service_type: rate.service_type.clone(),
            cost: rate.amount,
            estimated_delivery: rate.estimated_delivery_date.clone(),
        }
    }
}

/// Shipping label details written with the order.
///
/// No label service exists yet, so the label fields are placeholders until the backend
/// replaces them.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingLabel {
    /// Label id
    pub label_id: String,

    /// Carrier tracking number
    pub tracking_number: String,

    /// Printable label location
    pub label_url: String,

    /// Label fee charged
    pub label_price: Amount,

    /// Tax charged
    pub tax: Amount,

    /// Carrier service of the selected rate
    pub service_type: String,

    /// When the label was issued
    pub issued_at: Timestamp,

    /// Shop issuing the label
    pub shop_owner: String,
}

/// Tracking state written with the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingStatus {
    /// Delivery state
    pub status: String,

    /// When the state last changed
    pub last_updated: Timestamp,

    /// Last known parcel location
    pub location: String,

    /// Estimated delivery date
    pub estimated_delivery: String,
}

/// Payment state written with the order.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDetails {
    /// Gateway payment id
    pub payment_id: String,

    /// Payment state
    pub payment_status: String,

    /// How the shopper pays
    pub payment_method: String,

    /// Amount charged
    pub amount_paid: Amount,
}

/// Status written for a freshly submitted order.
pub const INITIAL_TRACKING_STATUS: &str = "Processing";

/// Payment status written for a freshly submitted order.
pub const INITIAL_PAYMENT_STATUS: &str = "Pending";

/// An order ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    /// Validated customer details
    pub customer: CustomerDetails,

    /// Frozen cart lines
    pub lines: Vec<OrderLine>,

    /// Sum of line totals
    pub subtotal: Amount,

    /// Subtotal plus shipping, tax and label fee
    pub total: Amount,

    /// Selected shipping rate
    pub shipping_rate: ShippingRateSnapshot,

    /// Shipping label
    pub shipping_label: ShippingLabel,

    /// Initial tracking state
    pub tracking_status: TrackingStatus,

    /// Initial payment state
    pub payment_details: PaymentDetails,
}

impl NewOrder {
    /// Compose an order from customer details, a cart and the selected rate.
    ///
    /// `total = subtotal + shipping + tax + label fee`.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the cart or order cannot be totalled.
    pub fn compose(
        customer: CustomerDetails,
        cart: &Cart,
        rate: &ShippingRate,
        policy: &PricingPolicy,
        now: Timestamp,
    ) -> Result<Self, PricingError> {
        let subtotal = cart.subtotal()?;
        let total = policy.checkout_total(subtotal, rate.amount)?;

        let lines = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity: item.quantity,
            })
            .collect();

        Ok(Self {
            lines,
            subtotal,
            total,
            shipping_rate: rate.into(),
            shipping_label: ShippingLabel {
                label_id: "label_123".to_string(),
                tracking_number: "TRKxxxxxxxx".to_string(),
                label_url: "https://example.com/label/123".to_string(),
                label_price: policy.label_fee,
                tax: policy.tax,
                service_type: rate.service_type.clone(),
                issued_at: now,
                shop_owner: "Yusra Saleem".to_string(),
            },
            tracking_status: TrackingStatus {
                status: INITIAL_TRACKING_STATUS.to_string(),
                last_updated: now,
                location: customer.city.clone(),
                estimated_delivery: rate.estimated_delivery_date.clone(),
            },
            payment_details: PaymentDetails {
                payment_id: "pay_123".to_string(),
                payment_status: INITIAL_PAYMENT_STATUS.to_string(),
                payment_method: "Credit Card".to_string(),
                amount_paid: total,
            },
            customer,
        })
    }
}

/// Tracking fields of a stored order, as far as they have been written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredTracking {
    /// Delivery state
    pub status: Option<String>,

    /// Estimated delivery date
    pub estimated_delivery: Option<String>,
}

/// Label fields of a stored order, as far as they have been written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredLabel {
    /// Carrier tracking number
    pub tracking_number: Option<String>,

    /// Printable label location
    pub label_url: Option<String>,
}

/// A stored order as read back from the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredOrder {
    /// Order id
    pub id: OrderId,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Country
    pub country: String,

    /// Postal code
    pub postal_code: String,

    /// Tracking fields, if written
    pub tracking_status: Option<StoredTracking>,

    /// Label fields, if written
    pub shipping_label: Option<StoredLabel>,
}

/// What the order-completed page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatus {
    /// Order id
    pub order_id: OrderId,

    /// Address, city, country and postal code on one line
    pub shipping_address: String,

    /// Delivery state, `Processing` until one is recorded
    pub delivery_status: String,

    /// Carrier tracking number or empty
    pub tracking_number: String,

    /// Estimated delivery date or empty
    pub estimated_delivery: String,

    /// Recorded delivery state or empty
    pub status: String,

    /// Printable label location or empty
    pub label_url: String,
}

impl From<StoredOrder> for OrderStatus {
    fn from(order: StoredOrder) -> Self {
        let tracking = order.tracking_status.unwrap_or_default();
        let label = order.shipping_label.unwrap_or_default();

        Self {
            shipping_address: format!(
                "{}, {}, {}, {}",
                order.address, order.city, order.country, order.postal_code
            ),
            delivery_status: tracking
                .status
                .clone()
                .unwrap_or_else(|| INITIAL_TRACKING_STATUS.to_string()),
            tracking_number: label.tracking_number.unwrap_or_default(),
            estimated_delivery: tracking.estimated_delivery.unwrap_or_default(),
            status: tracking.status.unwrap_or_default(),
            label_url: label.label_url.unwrap_or_default(),
            order_id: order.id,
        }
    }
}
