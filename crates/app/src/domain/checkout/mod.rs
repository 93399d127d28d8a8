//! Order submission

mod errors;
mod service;

pub use errors::CheckoutError;
pub use service::*;
