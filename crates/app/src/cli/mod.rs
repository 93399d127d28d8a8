use clap::{Parser, Subcommand};
use storefront::errors::Categorized;
use storefront_app::{config::LoggingConfig, observability};

mod checkout;
mod orders;
mod products;
mod rates;

#[derive(Debug, Parser)]
#[command(name = "storefront-app", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List catalog products
    Products(products::ProductsArgs),

    /// Fetch shipping rates
    Rates(rates::RatesArgs),

    /// Show the status of an order
    OrderStatus(orders::OrderStatusArgs),

    /// Submit a cart for checkout
    Checkout(checkout::CheckoutArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init_subscriber(&self.logging).map_err(|error| error.to_string())?;

        match self.command {
            Commands::Products(args) => products::run(args).await,
            Commands::Rates(args) => rates::run(args).await,
            Commands::OrderStatus(args) => orders::run(args).await,
            Commands::Checkout(args) => checkout::run(args).await,
        }
    }
}

/// Message for a failure shown to the shopper.
pub(crate) fn report<E: Categorized + std::error::Error>(error: &E) -> String {
    format!("{} ({error})", error.user_message())
}
