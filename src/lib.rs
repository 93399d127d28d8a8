//! Storefront
//!
//! Domain core for the storefront: cart pricing, the product catalog filter and sort
//! pipeline, shipping rate selection, checkout form validation and order composition.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod errors;
pub mod money;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod shipping;

#[cfg(test)]
mod fixtures;
