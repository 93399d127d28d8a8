use clap::Args;
use storefront::{money::to_decimal, shipping::RateQuery};
use storefront_app::{config::ShippingConfig, context::shipping_service};

use crate::cli::report;

#[derive(Debug, Args)]
pub(crate) struct RatesArgs {
    #[command(flatten)]
    shipping: ShippingConfig,

    /// Parcel weight in pounds
    #[arg(long, default_value_t = 1)]
    weight: u32,
}

pub(crate) async fn run(args: RatesArgs) -> Result<(), String> {
    let service = shipping_service(&args.shipping)
        .map_err(|error| format!("failed to initialise: {error}"))?;

    let query = RateQuery {
        weight_lbs: args.weight,
        ..RateQuery::default()
    };

    let selection = service
        .fetch_rates(&query)
        .await
        .map_err(|error| report(&error))?;

    if selection.rates().is_empty() {
        println!("no shipping rates available");
        return Ok(());
    }

    for rate in selection.rates() {
        println!(
            "{}\t{}\t{}\t{}",
            rate.rate_id,
            rate.service_type,
            to_decimal(&rate.amount),
            rate.estimated_delivery_date
        );
    }

    Ok(())
}
