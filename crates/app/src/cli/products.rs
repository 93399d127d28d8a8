use clap::Args;
use rust_decimal::Decimal;
use storefront::{
    catalog::{PerPage, PriceRange, ProductFilter, SortOrder, facets, render},
    money::{CURRENCY, from_decimal, to_decimal},
};
use storefront_app::{config::ContentStoreArgs, context::StoreContext};

#[derive(Debug, Args)]
pub(crate) struct ProductsArgs {
    #[command(flatten)]
    content_store: ContentStoreArgs,

    /// Brand to include; repeatable
    #[arg(long = "brand")]
    brands: Vec<String>,

    /// Discount offer label to include, e.g. "20% Cashback"; repeatable
    #[arg(long = "discount", value_parser = parse_discount)]
    discounts: Vec<String>,

    /// Minimum rating (3, 4 or 5 stars)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    min_rating: Option<u8>,

    /// Category to include; repeatable
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Color to include; repeatable
    #[arg(long = "color")]
    colors: Vec<String>,

    /// Lowest price shown
    #[arg(long, default_value = "0")]
    min_price: Decimal,

    /// Highest price shown
    #[arg(long, default_value = "1000")]
    max_price: Decimal,

    /// Sort order (best-match, price-low-high, price-high-low)
    #[arg(long, default_value_t = SortOrder::BestMatch)]
    sort: SortOrder,

    /// Products per page (15, 30 or 45)
    #[arg(long, default_value_t = 15, value_parser = parse_per_page)]
    per_page: usize,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,
}

fn parse_discount(value: &str) -> Result<String, String> {
    facets::DiscountFacet::by_label(value)
        .map(|facet| facet.label.to_string())
        .ok_or_else(|| format!("unknown discount offer: {value}"))
}

fn parse_per_page(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .ok()
        .and_then(PerPage::from_count)
        .map(PerPage::count)
        .ok_or_else(|| format!("products per page must be 15, 30 or 45, got {value}"))
}

pub(crate) async fn run(args: ProductsArgs) -> Result<(), String> {
    let store = StoreContext::from_config(&args.content_store)
        .map_err(|error| format!("failed to initialise: {error}"))?;

    let price_range = PriceRange {
        min: from_decimal(args.min_price, CURRENCY).map_err(|error| error.to_string())?,
        max: from_decimal(args.max_price, CURRENCY).map_err(|error| error.to_string())?,
    };

    let filter = ProductFilter {
        brands: args.brands,
        discounts: args.discounts,
        min_rating: args.min_rating,
        categories: args.categories,
        colors: args.colors,
        price_range,
    };

    let per_page = PerPage::from_count(args.per_page).unwrap_or_default();

    let catalog = store.products.fetch_products().await;
    let matching = filter.apply(&catalog).len();
    let page = render(&catalog, &filter, args.sort, per_page, args.page);

    println!(
        "showing {} of {matching} matching products (page {}, sorted by {})",
        page.len(),
        args.page,
        args.sort
    );

    for product in page {
        let discounted = product
            .price_without_discount()
            .map_or_else(|_| "-".to_string(), |price| to_decimal(&price).to_string());

        println!(
            "{}\t{}\t{}\t{}\t{discounted}\t{}% off\t{} stars",
            product.id,
            product.name,
            product.brand,
            to_decimal(&product.price),
            product.discount_percentage,
            product.rating
        );
    }

    Ok(())
}
