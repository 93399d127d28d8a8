//! Products

mod service;

pub use service::*;
