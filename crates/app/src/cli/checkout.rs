use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, de::DeserializeOwned};
use storefront::{
    cart::CartItem,
    checkout::CheckoutForm,
    money::{CURRENCY, MoneyConversionError, from_decimal, to_decimal},
    shipping::RateQuery,
};
use storefront_app::{
    config::{ContentStoreArgs, PaymentsConfig, PricingConfig, ShippingConfig},
    context::AppContext,
    domain::checkout::CheckoutSubmission,
};
use tracing::info;

use crate::cli::report;

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    #[command(flatten)]
    content_store: ContentStoreArgs,

    #[command(flatten)]
    shipping: ShippingConfig,

    #[command(flatten)]
    payments: PaymentsConfig,

    #[command(flatten)]
    pricing: PricingConfig,

    /// JSON file holding the cart items
    #[arg(long)]
    cart: PathBuf,

    /// JSON file holding the checkout form
    #[arg(long)]
    form: PathBuf,

    /// Shipping rate to select from the fetched rates
    #[arg(long)]
    rate_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CartItemInput {
    id: String,
    name: String,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    quantity: u32,
    color: Option<String>,
    size: Option<String>,
    #[serde(default)]
    image: String,
}

impl TryFrom<CartItemInput> for CartItem {
    type Error = MoneyConversionError;

    fn try_from(input: CartItemInput) -> Result<Self, Self::Error> {
        Ok(Self {
            price: from_decimal(input.price, CURRENCY)?,
            id: input.id,
            name: input.name,
            quantity: input.quantity,
            color: input.color,
            size: input.size,
            image: input.image,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FormInput {
    first_name: String,
    last_name: String,
    email: String,
    address: String,
    apartment: Option<String>,
    city: String,
    country: String,
    postal_code: String,
    save_info: bool,
}

impl From<FormInput> for CheckoutForm {
    fn from(input: FormInput) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            address: input.address,
            apartment: input.apartment,
            city: input.city,
            country: input.country,
            postal_code: input.postal_code,
            save_info: input.save_info,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = fs::read_to_string(path)
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

    serde_json::from_str(&text)
        .map_err(|error| format!("invalid json in {}: {error}", path.display()))
}

pub(crate) async fn run(args: CheckoutArgs) -> Result<(), String> {
    let ctx = AppContext::from_config(
        &args.content_store,
        &args.shipping,
        &args.payments,
        &args.pricing,
    )
    .map_err(|error| format!("failed to initialise: {error}"))?;

    let checkout = ctx.checkout().map_err(|error| report(&error))?;

    let items: Vec<CartItemInput> = read_json(&args.cart)?;

    for input in items {
        let item = CartItem::try_from(input).map_err(|error| error.to_string())?;

        ctx.cart.add_item(item).map_err(|error| error.to_string())?;
    }

    let subtotal = ctx.cart.subtotal().map_err(|error| error.to_string())?;

    info!(items = ctx.cart.items().len(), subtotal = %subtotal, "loaded cart");

    let form: FormInput = read_json(&args.form)?;

    let customer = match CheckoutForm::from(form).validate() {
        Ok(customer) => customer,
        Err(errors) => {
            for error in &errors.0 {
                eprintln!("{}: {}", error.field.key(), error.message);
            }

            return Err("checkout form is invalid".to_string());
        }
    };

    let mut selection = ctx
        .shipping
        .fetch_rates(&RateQuery::default())
        .await
        .map_err(|error| report(&error))?;

    let selected_rate = match args.rate_id.as_deref() {
        Some(rate_id) => {
            let rate = selection
                .select(rate_id)
                .map_err(|error| error.to_string())?;

            Some(rate.clone())
        }
        None => None,
    };

    let redirect = checkout
        .submit(CheckoutSubmission {
            customer,
            cart: ctx.cart.snapshot(),
            selected_rate,
        })
        .await
        .map_err(|error| report(&error))?;

    println!("subtotal: {}", to_decimal(&subtotal));
    println!("order_id: {}", redirect.order_id);
    println!("session_id: {}", redirect.session_id);
    println!("publishable_key: {}", redirect.publishable_key);

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use storefront::money::minor;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn cart_item_input_converts_to_minor_units() -> TestResult {
        let input: CartItemInput = serde_json::from_value(json!({
            "id": "a",
            "name": "Armchair",
            "price": 129.99,
            "quantity": 2,
            "color": "#FFC93E",
            "size": null
        }))?;

        let item = CartItem::try_from(input)?;

        assert_eq!(item.price, minor(129_99));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.image, "");

        Ok(())
    }

    #[test]
    fn missing_form_fields_fail_validation() -> TestResult {
        let input: FormInput = serde_json::from_value(json!({ "firstName": "Ada" }))?;

        let Err(errors) = CheckoutForm::from(input).validate() else {
            panic!("expected field errors");
        };

        assert_eq!(errors.len(), 6);

        Ok(())
    }
}
