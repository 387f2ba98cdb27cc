//! Catalog browsing commands: home, category listing, product detail.
//!
//! Read failures are logged and rendered as an empty result rather than
//! aborting the command.

use clap::Args;
use techstore_client::{fallback, ProductQuery, StoreClient, StoreError};
use techstore_core::{
    apply, color_name, format_price, select_shape, Category, FilterConfig, PriceRange, Product,
    SortKey,
};

/// Options for the `products` listing.
#[derive(Debug, Args)]
pub struct ListingArgs {
    /// Restrict to a category (Laptop, Smartphone, Audio, Wearable)
    #[arg(long)]
    pub category: Option<Category>,
    /// Restrict to a product type tag (e.g. laptop, phone)
    #[arg(long = "type")]
    pub product_type: Option<String>,
    /// Lowest price to show, inclusive
    #[arg(long)]
    pub min_price: Option<u64>,
    /// Highest price to show, inclusive
    #[arg(long)]
    pub max_price: Option<u64>,
    /// Keep products whose name contains this text (repeatable, case-sensitive)
    #[arg(long = "brand")]
    pub brands: Vec<String>,
    /// Keep products offered in this colour (repeatable)
    #[arg(long = "color")]
    pub colors: Vec<String>,
    /// Sort order: name, price_asc, price_desc, newest
    #[arg(long)]
    pub sort: Option<String>,
    /// Maximum number of products to request from the backend
    #[arg(long)]
    pub limit: Option<u32>,
}

impl ListingArgs {
    pub(crate) fn query(&self) -> ProductQuery {
        ProductQuery {
            featured: None,
            limit: self.limit,
            category: self.category,
            product_type: self.product_type.clone(),
        }
    }

    /// Builds the client-side filter. Unrecognised sort keys keep backend order.
    pub(crate) fn filter_config(&self) -> anyhow::Result<FilterConfig> {
        let range = PriceRange::new(
            self.min_price.unwrap_or(0),
            self.max_price.unwrap_or(u64::MAX),
        )?;
        let sort = self.sort.as_deref().and_then(|raw| {
            let parsed = SortKey::parse_lenient(raw);
            if parsed.is_none() {
                tracing::warn!(sort = raw, "unrecognised sort key; keeping backend order");
            }
            parsed
        });
        Ok(FilterConfig {
            price_range: range,
            brands: self.brands.iter().cloned().collect(),
            colors: self.colors.iter().cloned().collect(),
            sort,
        })
    }
}

pub(crate) async fn run_home(client: &StoreClient, limit: u32) {
    let products = fallback::or_default("home", client.featured_products(limit).await);
    if products.is_empty() {
        println!("no featured products");
        return;
    }
    println!("Featured products");
    for product in &products {
        print_row(product);
    }
}

/// # Errors
///
/// Returns an error if the price bounds are inverted. Backend failures are
/// logged and shown as an empty listing.
pub(crate) async fn run_products(client: &StoreClient, args: &ListingArgs) -> anyhow::Result<()> {
    let config = args.filter_config()?;
    let products = fallback::or_default(
        "product listing",
        client.list_products(&args.query()).await,
    );
    let shown = apply(&products, &config);

    println!("{} of {} products", shown.len(), products.len());
    for product in &shown {
        print_row(product);
    }
    Ok(())
}

pub(crate) async fn run_product(client: &StoreClient, id: &str) {
    let result = client.get_product(id).await;
    if let Err(StoreError::NotFound { .. }) = result {
        println!("product {id} not found");
        return;
    }
    let Some(product) = fallback::or_default("product detail", result.map(Some)) else {
        println!("product {id} is unavailable");
        return;
    };

    println!("{}", product.name);
    println!("  {}", product.description);
    println!("  category: {}", product.category);
    println!("  price:    {}", format_price(product.price));
    if product.in_stock() {
        println!("  stock:    {}", product.stock);
    } else {
        println!("  stock:    sold out");
    }
    if !product.colors.is_empty() {
        let colors = product
            .colors
            .iter()
            .map(|c| match color_name(c) {
                Some(name) => format!("{name} ({c})"),
                None => c.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        println!("  colours:  {colors}");
    }

    let shape = select_shape(&product.product_type, product.default_color(), 1.0);
    println!(
        "  viewer:   {} in {}{}",
        shape.geometry,
        shape.color,
        if shape.rotating { ", rotating" } else { "" }
    );
}

fn print_row(product: &Product) {
    let featured = if product.featured { " *" } else { "" };
    println!(
        "  {:<36} {:>14}  {:<10} {}{featured}",
        product.name,
        format_price(product.price),
        product.category,
        product.id,
    );
}
