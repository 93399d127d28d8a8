//! Storefront services: content store, shipping rates, payments and checkout.

pub mod config;
pub mod content_store;
pub mod context;
pub mod domain;
pub mod observability;

#[cfg(test)]
mod test;
