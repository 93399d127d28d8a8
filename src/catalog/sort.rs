//! Product sort orders

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::catalog::Product;

/// Error parsing a sort key.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

/// Listing sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Content store order.
    #[default]
    BestMatch,

    /// Cheapest first.
    PriceLowHigh,

    /// Most expensive first.
    PriceHighLow,
}

impl SortOrder {
    /// Key used by the listing page's sort selector.
    pub fn key(self) -> &'static str {
        match self {
            Self::BestMatch => "best-match",
            Self::PriceLowHigh => "price-low-high",
            Self::PriceHighLow => "price-high-low",
        }
    }

    /// Sort products in place. Products with equal prices keep their relative order.
    pub fn sort(self, products: &mut [Product]) {
        match self {
            Self::BestMatch => {}
            Self::PriceLowHigh => products.sort_by_key(|product| product.price.to_minor_units()),
            Self::PriceHighLow => products
                .sort_by_key(|product| std::cmp::Reverse(product.price.to_minor_units())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best-match" => Ok(Self::BestMatch),
            "price-low-high" => Ok(Self::PriceLowHigh),
            "price-high-low" => Ok(Self::PriceHighLow),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use testresult::TestResult;

    use crate::fixtures::product;

    use super::*;

    fn ids(products: &[Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn parses_listing_keys() -> TestResult {
        assert_eq!("price-low-high".parse::<SortOrder>()?, SortOrder::PriceLowHigh);
        assert_eq!("best-match".parse::<SortOrder>()?, SortOrder::BestMatch);
        assert_eq!(
            "newest".parse::<SortOrder>(),
            Err(UnknownSortOrder("newest".to_string()))
        );

        Ok(())
    }

    #[test]
    fn best_match_keeps_order() {
        let mut products = vec![product("b", 30_00), product("a", 10_00)];

        SortOrder::BestMatch.sort(&mut products);

        assert_eq!(ids(&products), ["b", "a"]);
    }

    #[test]
    fn equal_prices_keep_relative_order() {
        let mut products = vec![product("x", 5_00), product("y", 5_00), product("z", 5_00)];

        SortOrder::PriceHighLow.sort(&mut products);
        assert_eq!(ids(&products), ["x", "y", "z"]);

        SortOrder::PriceLowHigh.sort(&mut products);
        assert_eq!(ids(&products), ["x", "y", "z"]);
    }

    proptest! {
        #[test]
        fn descending_reverses_ascending_for_distinct_prices(
            prices in prop::collection::hash_set(0_i64..100_000, 0..20),
        ) {
            let mut products: Vec<Product> = prices
                .into_iter()
                .enumerate()
                .map(|(i, price)| product(&format!("p{i}"), price))
                .collect();

            SortOrder::PriceLowHigh.sort(&mut products);
            let ascending = ids(&products);

            SortOrder::PriceHighLow.sort(&mut products);
            let mut descending = ids(&products);
            descending.reverse();

            prop_assert_eq!(ascending, descending);
        }
    }
}
