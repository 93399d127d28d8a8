//! Listing page facets.

use rust_decimal::Decimal;

/// Brands offered by the brand facet.
pub const BRANDS: [&str; 6] = [
    "Coaster Furniture",
    "Fusion Dot High Fashion",
    "Unique Furnitture Resto",
    "Dream Furnitture Flipping",
    "Young Repurposed",
    "Green DIY furniture",
];

/// Categories offered by the category facet.
pub const CATEGORIES: [&str; 2] = ["Chair", "Sofa"];

/// Colours offered by the colour facet.
pub const COLORS: [&str; 6] = [
    "#FF8CB8", "#FFC93E", "#7C4AFF", "#41D37E", "#FB7DA9", "#6DCEF5",
];

/// Minimum ratings offered by the rating facet.
pub const RATINGS: [u8; 3] = [5, 4, 3];

/// Default price slider bounds.
pub const DEFAULT_PRICE_RANGE: (i64, i64) = (0, 1000);

/// A discount facet: a label bound to the minimum discount percentage it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountFacet {
    /// Label shown on the listing page
    pub label: &'static str,

    /// Minimum discount percentage
    pub threshold: u8,
}

/// Discount facets in display order.
pub const DISCOUNTS: [DiscountFacet; 3] = [
    DiscountFacet {
        label: "20% Cashback",
        threshold: 20,
    },
    DiscountFacet {
        label: "5% Cashback Offer",
        threshold: 5,
    },
    DiscountFacet {
        label: "25% Discount Offer",
        threshold: 25,
    },
];

impl DiscountFacet {
    /// Look up a facet by its label.
    pub fn by_label(label: &str) -> Option<Self> {
        DISCOUNTS.into_iter().find(|facet| facet.label == label)
    }

    /// Whether a discount percentage qualifies for this facet.
    pub fn admits(self, discount_percentage: Decimal) -> bool {
        discount_percentage >= Decimal::from(self.threshold)
    }
}
