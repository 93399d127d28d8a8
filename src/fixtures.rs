//! Fixtures

use rust_decimal::Decimal;

use crate::{
    cart::CartItem, catalog::Product, checkout::CustomerDetails, money::minor,
    shipping::ShippingRate,
};

pub(crate) fn cart_item(id: &str, price: i64, quantity: u32) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: format!("Product {id}"),
        price: minor(price),
        quantity,
        color: None,
        size: None,
        image: format!("https://cdn.example.com/{id}.png"),
    }
}

pub(crate) fn product(id: &str, price: i64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        description: String::new(),
        price: minor(price),
        discount_percentage: Decimal::ZERO,
        rating: Decimal::from(4),
        rating_count: 10,
        tags: Vec::new(),
        sizes: Vec::new(),
        image_url: format!("https://cdn.example.com/{id}.png"),
        colors: vec!["#FF8CB8".to_string()],
        brand: "Coaster Furniture".to_string(),
        category: "Chair".to_string(),
    }
}

pub(crate) fn shipping_rate(rate_id: &str, amount: i64) -> ShippingRate {
    ShippingRate {
        rate_id: rate_id.to_string(),
        service_type: "ups_ground".to_string(),
        amount: minor(amount),
        estimated_delivery_date: "2026-10-20T00:00:00Z".to_string(),
    }
}

pub(crate) fn customer() -> CustomerDetails {
    CustomerDetails {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 Analytical Row".to_string(),
        apartment: None,
        city: "London".to_string(),
        country: "GB".to_string(),
        postal_code: "NW1 6XE".to_string(),
        save_info: false,
    }
}
