//! Product catalog
//!
//! Products as projected by the content store, and the client-side pipeline the listing
//! page runs over them: [`ProductFilter`] → [`SortOrder`] → [`paginate`].

use rust_decimal::Decimal;

use crate::money::{Amount, MoneyConversionError, from_decimal, to_decimal};

pub mod facets;
mod filter;
mod pages;
mod sort;

pub use filter::{PriceRange, ProductFilter};
pub use pages::{PerPage, paginate};
pub use sort::{SortOrder, UnknownSortOrder};

/// A catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Content store document id
    pub id: String,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Listed price
    pub price: Amount,

    /// Discount percentage, 0-100
    pub discount_percentage: Decimal,

    /// Average rating
    pub rating: Decimal,

    /// Number of ratings
    pub rating_count: u32,

    /// Free-form tags
    pub tags: Vec<String>,

    /// Available sizes
    pub sizes: Vec<String>,

    /// Image URL
    pub image_url: String,

    /// Available colours
    pub colors: Vec<String>,

    /// Brand name
    pub brand: String,

    /// Category name
    pub category: String,
}

impl Product {
    /// Price after the product's discount is taken off.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyConversionError`] if the discounted amount cannot be represented.
    pub fn price_without_discount(&self) -> Result<Amount, MoneyConversionError> {
        let currency = self.price.currency();
        let price = to_decimal(&self.price);

        let discounted = self
            .discount_percentage
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|fraction| Decimal::ONE.checked_sub(fraction))
            .and_then(|factor| price.checked_mul(factor))
            .ok_or(MoneyConversionError::OutOfRange(price, currency.iso_alpha_code))?;

        from_decimal(discounted, currency)
    }
}

/// Filter, sort and paginate products for one listing page.
pub fn render(
    products: &[Product],
    filter: &ProductFilter,
    sort: SortOrder,
    per_page: PerPage,
    page: usize,
) -> Vec<Product> {
    let mut selected = filter.apply(products);

    sort.sort(&mut selected);

    paginate(&selected, per_page, page).to_vec()
}
