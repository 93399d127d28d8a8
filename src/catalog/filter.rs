//! Product filter

use rust_decimal::Decimal;

use crate::{
    catalog::{
        Product,
        facets::{DEFAULT_PRICE_RANGE, DiscountFacet},
    },
    money::{Amount, CURRENCY, minor},
};

/// Inclusive price bounds of the price slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lower bound, inclusive
    pub min: Amount,

    /// Upper bound, inclusive
    pub max: Amount,
}

impl Default for PriceRange {
    fn default() -> Self {
        let (min, max) = DEFAULT_PRICE_RANGE;
        let scale = 10_i64.pow(CURRENCY.exponent);

        Self {
            min: minor(min * scale),
            max: minor(max * scale),
        }
    }
}

impl PriceRange {
    /// Whether an amount lies within the bounds.
    pub fn contains(&self, price: &Amount) -> bool {
        let units = price.to_minor_units();

        self.min.to_minor_units() <= units && units <= self.max.to_minor_units()
    }
}

/// Facet selections on the listing page.
///
/// Facets are AND-combined; values within a facet are OR-combined. An empty selection
/// admits every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Selected brands
    pub brands: Vec<String>,

    /// Selected discount facet labels
    pub discounts: Vec<String>,

    /// Minimum rating (single select)
    pub min_rating: Option<u8>,

    /// Selected categories
    pub categories: Vec<String>,

    /// Selected colours; a product matches if it offers any of them
    pub colors: Vec<String>,

    /// Price slider bounds
    pub price_range: PriceRange,
}

impl ProductFilter {
    /// Whether a product passes every facet.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_brand(product)
            && self.matches_discount(product)
            && self.matches_rating(product)
            && self.matches_category(product)
            && self.matches_color(product)
            && self.price_range.contains(&product.price)
    }

    /// Products passing the filter, in their original order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|product| self.matches(product))
            .cloned()
            .collect()
    }

    fn matches_brand(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.contains(&product.brand)
    }

    fn matches_discount(&self, product: &Product) -> bool {
        self.discounts.is_empty()
            || self.discounts.iter().any(|label| {
                DiscountFacet::by_label(label)
                    .is_some_and(|facet| facet.admits(product.discount_percentage))
            })
    }

    fn matches_rating(&self, product: &Product) -> bool {
        self.min_rating
            .is_none_or(|min| product.rating >= Decimal::from(min))
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    fn matches_color(&self, product: &Product) -> bool {
        self.colors.is_empty() || self.colors.iter().any(|color| product.colors.contains(color))
    }
}
