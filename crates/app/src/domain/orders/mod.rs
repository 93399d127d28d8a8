//! Orders

mod errors;
mod repository;
mod status;

pub use errors::{OrderStatusError, OrdersError};
pub use repository::*;
pub use status::*;
