//! Guest cart commands.
//!
//! Reading the cart degrades to a notice when the backend is down; changing it
//! reports the failure and exits non-zero.

use clap::Subcommand;
use techstore_client::{SessionContext, StoreClient};
use techstore_core::{color_name, format_price, Cart, Product};

#[derive(Debug, Subcommand)]
pub enum CartCommands {
    /// Show the items in the cart with a subtotal
    Show,
    /// Add a product to the cart
    Add {
        /// Product identifier
        product_id: String,
        /// Colour as a hex string (defaults to the product's first colour)
        #[arg(long)]
        color: Option<String>,
        /// Number of units to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a cart line by its item identifier
    Remove {
        /// Cart item identifier (see `cart show`)
        item_id: String,
    },
    /// Remove every item from the cart
    Clear,
}

/// # Errors
///
/// Returns an error if a cart mutation fails. Failing to read the cart for
/// `show` is logged and does not fail the command.
pub(crate) async fn run_cart(
    client: &StoreClient,
    session: &SessionContext,
    command: CartCommands,
) -> anyhow::Result<()> {
    let id = session.id();
    match command {
        CartCommands::Show => match client.get_cart(id).await {
            Ok(cart) => {
                let products = client.cart_products(&cart).await;
                print_cart(&cart, &products);
            }
            Err(e) => {
                tracing::warn!(session_id = %id, error = %e, "cart fetch failed");
                println!("cart unavailable");
            }
        },
        CartCommands::Add {
            product_id,
            color,
            quantity,
        } => {
            let color = match color {
                Some(color) => color,
                None => client
                    .get_product(&product_id)
                    .await?
                    .default_color()
                    .to_string(),
            };
            let cart = client.add_item(id, &product_id, quantity, &color).await?;
            tracing::info!(
                session_id = %id,
                product_id = %product_id,
                quantity,
                color = %color,
                "item added"
            );
            println!("added; cart now holds {} item(s)", cart.item_count());
        }
        CartCommands::Remove { item_id } => {
            let cart = client.remove_item(id, &item_id).await?;
            println!("removed; cart now holds {} item(s)", cart.item_count());
        }
        CartCommands::Clear => {
            client.clear_cart(id).await?;
            println!("cart cleared");
        }
    }
    Ok(())
}

fn print_cart(cart: &Cart, catalog: &[Product]) {
    if cart.is_empty() {
        println!("cart is empty");
        return;
    }
    for item in &cart.items {
        let product = catalog.iter().find(|p| p.id == item.product_id);
        let name = product.map_or(item.product_id.as_str(), |p| p.name.as_str());
        let color = color_name(&item.selected_color).unwrap_or(item.selected_color.as_str());
        println!("  {:<10} {name:<36} x{:<3} {color}", item.id, item.quantity);
    }
    println!(
        "{} item(s), subtotal {}",
        cart.item_count(),
        format_price(cart.subtotal(catalog))
    );
}
