//! Shipping

mod client;
mod errors;
mod service;

pub use client::*;
pub use errors::ShippingError;
pub use service::ShippingService;
