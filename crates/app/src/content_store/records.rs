//! Content store documents
//!
//! Wire shapes of product and order documents, and their conversions to and from the
//! storefront domain types. Amounts travel as JSON numbers.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use storefront::{
    catalog::Product,
    money::{CURRENCY, MoneyConversionError, from_decimal, to_decimal},
    orders::{NewOrder, OrderId, OrderLine, StoredLabel, StoredOrder, StoredTracking},
};
use thiserror::Error;

/// Product projection.
pub const PRODUCTS_QUERY: &str = r#"*[_type == "product"]{
  _id,
  name,
  description,
  price,
  discountPercentage,
  rating,
  ratingCount,
  tags,
  sizes,
  "imageUrl": image.asset->url,
  colors,
  brand,
  category
}"#;

/// Single order by id.
pub const ORDER_BY_ID_QUERY: &str = r#"*[_type == "order" && _id == $orderId][0]"#;

/// Product document as projected by [`PRODUCTS_QUERY`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Document id
    #[serde(rename = "_id")]
    pub id: String,

    /// Product name
    pub name: Option<String>,

    /// Product description
    pub description: Option<String>,

    /// Price in whole currency units
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,

    /// Discount percentage, 0 to 100
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub discount_percentage: Option<Decimal>,

    /// Average rating
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub rating: Option<Decimal>,

    /// Number of ratings
    pub rating_count: Option<u32>,

    /// Free-form tags
    pub tags: Option<Vec<String>>,

    /// Available sizes
    pub sizes: Option<Vec<String>>,

    /// Product image
    pub image_url: Option<String>,

    /// Available colors
    pub colors: Option<Vec<String>>,

    /// Brand
    pub brand: Option<String>,

    /// Category
    pub category: Option<String>,
}

/// A product document that cannot be listed.
#[derive(Debug, Error)]
pub enum ProductRecordError {
    /// The document does not have the product shape.
    #[error("malformed product document")]
    Malformed(#[from] serde_json::Error),

    /// A required field is absent or blank.
    #[error("product document has no {0}")]
    MissingField(&'static str),

    /// The price does not fit in minor units.
    #[error("product price cannot be represented")]
    Price(#[from] MoneyConversionError),
}

impl TryFrom<ProductRecord> for Product {
    type Error = ProductRecordError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let name = record
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ProductRecordError::MissingField("name"))?;
        let price = record.price.ok_or(ProductRecordError::MissingField("price"))?;

        Ok(Self {
            price: from_decimal(price, CURRENCY)?,
            id: record.id,
            name,
            description: record.description.unwrap_or_default(),
            discount_percentage: record.discount_percentage.unwrap_or_default(),
            rating: record.rating.unwrap_or_default(),
            rating_count: record.rating_count.unwrap_or_default(),
            tags: record.tags.unwrap_or_default(),
            sizes: record.sizes.unwrap_or_default(),
            image_url: record.image_url.unwrap_or_default(),
            colors: record.colors.unwrap_or_default(),
            brand: record.brand.unwrap_or_default(),
            category: record.category.unwrap_or_default(),
        })
    }
}

impl TryFrom<Value> for Product {
    type Error = ProductRecordError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        Self::try_from(serde_json::from_value::<ProductRecord>(document)?)
    }
}

/// Order line as written to, and sent alongside, an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderLineDocument {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units ordered
    pub quantity: u32,
}

impl From<&OrderLine> for OrderLineDocument {
    fn from(line: &OrderLine) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            price: to_decimal(&line.price),
            quantity: line.quantity,
        }
    }
}

/// Order document written at checkout.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDocument {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Street address
    pub address: String,

    /// Apartment, suite or unit
    pub apartment: Option<String>,

    /// City
    pub city: String,

    /// Country
    pub country: String,

    /// Postal code
    pub postal_code: String,

    /// Whether the shopper asked to save these details
    pub save_info: bool,

    /// Ordered lines
    pub cart_items: Vec<OrderLineDocument>,

    /// Sum of line totals
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,

    /// Amount due
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    /// Selected shipping rate
    pub shipping_rate: ShippingRateDocument,

    /// Shipping label
    pub shipping_label: ShippingLabelDocument,

    /// Initial tracking state
    pub tracking_status: TrackingStatusDocument,

    /// Initial payment state
    pub payment_details: PaymentDetailsDocument,
}

/// Selected shipping rate as written with an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRateDocument {
    /// Provider-assigned rate id
    pub rate_id: String,

    /// Carrier service
    pub service_type: String,

    /// Shipping cost
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,

    /// Estimated delivery date
    pub estimated_delivery: String,
}

/// Shipping label as written with an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingLabelDocument {
    /// Label id
    pub label_id: String,

    /// Carrier tracking number
    pub tracking_number: String,

    /// Printable label location
    pub label_url: String,

    /// Label fee
    #[serde(with = "rust_decimal::serde::float")]
    pub label_price: Decimal,

    /// Tax
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,

    /// Carrier service
    pub service_type: String,

    /// When the label was issued
    pub issued_at: Timestamp,

    /// Shop issuing the label
    pub shop_owner: String,
}

/// Tracking state as written with an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStatusDocument {
    /// Delivery state
    pub status: String,

    /// When the state last changed
    pub last_updated: Timestamp,

    /// Last known parcel location
    pub location: String,

    /// Estimated delivery date
    pub estimated_delivery: String,
}

/// Payment state as written with an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailsDocument {
    /// Gateway payment id
    pub payment_id: String,

    /// Payment state
    pub payment_status: String,

    /// How the shopper pays
    pub payment_method: String,

    /// Amount charged
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_paid: Decimal,
}

impl From<&NewOrder> for OrderDocument {
    fn from(order: &NewOrder) -> Self {
        let customer = &order.customer;
        let label = &order.shipping_label;
        let tracking = &order.tracking_status;
        let payment = &order.payment_details;

        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            email: customer.email.clone(),
            address: customer.address.clone(),
            apartment: customer.apartment.clone(),
            city: customer.city.clone(),
            country: customer.country.clone(),
            postal_code: customer.postal_code.clone(),
            save_info: customer.save_info,
            cart_items: order.lines.iter().map(OrderLineDocument::from).collect(),
            subtotal: to_decimal(&order.subtotal),
            total: to_decimal(&order.total),
            shipping_rate: ShippingRateDocument {
                rate_id: order.shipping_rate.rate_id.clone(),
                service_type: order.shipping_rate.service_type.clone(),
                cost: to_decimal(&order.shipping_rate.cost),
                estimated_delivery: order.shipping_rate.estimated_delivery.clone(),
            },
            shipping_label: ShippingLabelDocument {
                label_id: label.label_id.clone(),
                tracking_number: label.tracking_number.clone(),
                label_url: label.label_url.clone(),
                label_price: to_decimal(&label.label_price),
                tax: to_decimal(&label.tax),
                service_type: label.service_type.clone(),
                issued_at: label.issued_at,
                shop_owner: label.shop_owner.clone(),
            },
            tracking_status: TrackingStatusDocument {
                status: tracking.status.clone(),
                last_updated: tracking.last_updated,
                location: tracking.location.clone(),
                estimated_delivery: tracking.estimated_delivery.clone(),
            },
            payment_details: PaymentDetailsDocument {
                payment_id: payment.payment_id.clone(),
                payment_status: payment.payment_status.clone(),
                payment_method: payment.payment_method.clone(),
                amount_paid: to_decimal(&payment.amount_paid),
            },
        }
    }
}

/// Stored order document, as far as the order-completed page reads it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Document id
    #[serde(rename = "_id")]
    pub id: String,

    /// Street address
    #[serde(default)]
    pub address: String,

    /// City
    #[serde(default)]
    pub city: String,

    /// Country
    #[serde(default)]
    pub country: String,

    /// Postal code
    #[serde(default)]
    pub postal_code: String,

    /// Tracking fields, if written
    pub tracking_status: Option<TrackingStatusRecord>,

    /// Label fields, if written
    pub shipping_label: Option<ShippingLabelRecord>,
}

/// Tracking fields of a stored order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingStatusRecord {
    /// Delivery state
    pub status: Option<String>,

    /// Estimated delivery date
    pub estimated_delivery: Option<String>,
}

/// Label fields of a stored order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingLabelRecord {
    /// Carrier tracking number
    pub tracking_number: Option<String>,

    /// Printable label location
    pub label_url: Option<String>,
}

impl From<OrderRecord> for StoredOrder {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: OrderId::new(record.id),
            address: record.address,
            city: record.city,
            country: record.country,
            postal_code: record.postal_code,
            tracking_status: record.tracking_status.map(|tracking| StoredTracking {
                status: tracking.status,
                estimated_delivery: tracking.estimated_delivery,
            }),
            shipping_label: record.shipping_label.map(|label| StoredLabel {
                tracking_number: label.tracking_number,
                label_url: label.label_url,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use storefront::{
        cart::Cart,
        money::minor,
        pricing::PricingPolicy,
    };
    use testresult::TestResult;

    use crate::test::{cart_item, customer, shipping_rate};

    use super::*;

    #[test]
    fn product_record_tolerates_null_fields() -> TestResult {
        let record: ProductRecord = serde_json::from_value(json!({
            "_id": "p1",
            "name": "Armchair",
            "description": null,
            "price": 129.99,
            "discountPercentage": 20,
            "rating": null,
            "ratingCount": null,
            "tags": null,
            "sizes": ["M"],
            "imageUrl": null,
            "colors": ["#FFC93E"],
            "brand": "Coaster Furniture",
            "category": "Chair"
        }))?;

        let product = Product::try_from(record)?;

        assert_eq!(product.price, minor(129_99));
        assert_eq!(product.discount_percentage, Decimal::from(20));
        assert_eq!(product.rating, Decimal::ZERO);
        assert!(product.tags.is_empty());
        assert_eq!(product.sizes, ["M"]);

        Ok(())
    }

    #[test]
    fn product_without_name_or_price_is_rejected() {
        let unnamed = Product::try_from(json!({ "_id": "p1", "name": " ", "price": 10 }));
        let unpriced = Product::try_from(json!({ "_id": "p2", "name": "Bench", "price": null }));

        assert!(
            matches!(unnamed, Err(ProductRecordError::MissingField("name"))),
            "expected missing name, got {unnamed:?}"
        );
        assert!(
            matches!(unpriced, Err(ProductRecordError::MissingField("price"))),
            "expected missing price, got {unpriced:?}"
        );
    }

    #[test]
    fn order_document_uses_camel_case_and_numbers() -> TestResult {
        let mut cart = Cart::default();
        cart.add_item(cart_item("a", 10_00, 2))?;

        let order = NewOrder::compose(
            customer(),
            &cart,
            &shipping_rate("se-1", 12_00),
            &PricingPolicy::default(),
            Timestamp::UNIX_EPOCH,
        )?;

        let value = serde_json::to_value(OrderDocument::from(&order))?;

        assert_eq!(value["firstName"], json!("Ada"));
        assert_eq!(value["cartItems"][0]["price"], json!(10.0));
        assert_eq!(value["cartItems"][0]["quantity"], json!(2));
        assert_eq!(value["total"], json!(40.5));
        assert_eq!(value["shippingRate"]["rateId"], json!("se-1"));
        assert_eq!(value["paymentDetails"]["paymentStatus"], json!("Pending"));

        Ok(())
    }

    #[test]
    fn order_record_maps_to_stored_order() -> TestResult {
        let record: OrderRecord = serde_json::from_value(json!({
            "_id": "order-1",
            "address": "12 Analytical Row",
            "city": "London",
            "country": "GB",
            "postalCode": "NW1 6XE",
            "trackingStatus": { "status": "Shipped" },
            "shippingLabel": null
        }))?;

        let stored = StoredOrder::from(record);

        assert_eq!(stored.id, OrderId::new("order-1"));
        assert_eq!(
            stored.tracking_status.and_then(|tracking| tracking.status).as_deref(),
            Some("Shipped")
        );
        assert!(stored.shipping_label.is_none());

        Ok(())
    }
}
