//! Content Store
//!
//! Headless document store holding product and order documents.

mod client;
mod errors;
pub mod records;

pub use client::{ContentStoreClient, ContentStoreConfig};
pub use errors::ContentStoreError;
