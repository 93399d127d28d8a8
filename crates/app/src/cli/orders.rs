use clap::{ArgGroup, Args};
use reqwest::Url;
use storefront::{errors::Categorized, orders::OrderId};
use storefront_app::{
    config::ContentStoreArgs,
    context::StoreContext,
    domain::orders::OrderStatusError,
};

use crate::cli::report;

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("order").required(true).args(["order_id", "url"])))]
pub(crate) struct OrderStatusArgs {
    #[command(flatten)]
    content_store: ContentStoreArgs,

    /// Order id
    #[arg(long)]
    order_id: Option<String>,

    /// Order-completed page URL carrying an `orderId` query parameter
    #[arg(long)]
    url: Option<Url>,
}

pub(crate) async fn run(args: OrderStatusArgs) -> Result<(), String> {
    let store = StoreContext::from_config(&args.content_store)
        .map_err(|error| format!("failed to initialise: {error}"))?;

    let result = match (args.order_id, args.url) {
        (Some(id), _) => store
            .order_status
            .get_order_status(&OrderId::new(id))
            .await
            .map(Some),
        (None, Some(url)) => store.order_status.lookup_from_url(&url).await,
        (None, None) => Ok(None),
    };

    let status = match result {
        Ok(Some(status)) => status,
        Ok(None) => return Ok(()),
        Err(error @ OrderStatusError::NotFound(_)) => {
            println!("{}", error.user_message());
            return Ok(());
        }
        Err(error) => return Err(report(&error)),
    };

    println!("order_id: {}", status.order_id);
    println!("shipping_address: {}", status.shipping_address);
    println!("delivery_status: {}", status.delivery_status);
    println!("tracking_number: {}", status.tracking_number);
    println!("estimated_delivery: {}", status.estimated_delivery);
    println!("label_url: {}", status.label_url);

    Ok(())
}
