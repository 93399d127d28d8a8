//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartItem},
    catalog::{PerPage, PriceRange, Product, ProductFilter, SortOrder, facets::DiscountFacet},
    checkout::{CheckoutForm, CustomerDetails, Field, FieldError, FieldErrors},
    errors::{Categorized, ErrorCategory, Severity},
    money::{Amount, CURRENCY, MoneyConversionError},
    orders::{NewOrder, OrderId, OrderStatus, StoredOrder},
    pricing::{PricingError, PricingPolicy},
    shipping::{
        CarrierIds, NoCarrierIds, RateQuery, RateSelection, ShipmentAddress, ShippingRate,
        UnknownRate,
    },
};
