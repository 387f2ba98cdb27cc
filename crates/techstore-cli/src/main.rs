mod cart;
mod catalog;
mod shape;

use clap::{Parser, Subcommand};
use techstore_client::{FileSessionStore, SessionContext, StoreClient};
use tracing_subscriber::EnvFilter;

use crate::cart::CartCommands;
use crate::catalog::ListingArgs;

#[derive(Debug, Parser)]
#[command(name = "techstore")]
#[command(about = "3D Tech Store storefront command line client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show featured products from the home page
    Home {
        /// Maximum number of products to show (defaults to TECHSTORE_PAGE_LIMIT)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List products with client-side filtering and sorting
    Products(ListingArgs),
    /// Show a product detail page
    Product {
        /// Product identifier
        id: String,
    },
    /// Inspect or change the guest cart
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
    /// Describe the 3D stand-in shape for a product type
    Shape {
        /// Product type tag (laptop, phone, headphones, watch)
        product_type: String,
        /// Fill colour as a hex string
        #[arg(long, default_value = techstore_core::shape::DEFAULT_COLOR)]
        color: String,
        /// Uniform scale factor (0.5 to 2.0)
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
        /// Reject unknown product types instead of using the fallback cube
        #[arg(long)]
        strict: bool,
        /// Describe the shape without the idle spin
        #[arg(long)]
        no_rotate: bool,
    },
    /// Print the guest session identifier, creating it if needed
    Session,
    /// Load the sample catalog into an empty backend
    Seed,
    /// Check that the backend API answers
    Status,
    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Commands that never touch the backend run without configuration.
    match cli.command {
        None => {
            init_tracing("info")?;
            println!("techstore ready; run `techstore --help` for commands");
            return Ok(());
        }
        Some(Commands::Shape {
            ref product_type,
            ref color,
            scale,
            strict,
            no_rotate,
        }) => {
            init_tracing("info")?;
            return shape::run_shape(product_type, color, scale, strict, !no_rotate);
        }
        Some(_) => {}
    }

    let config = techstore_core::load_app_config()?;
    init_tracing(&config.log_level)?;
    let client = StoreClient::from_config(&config)?;
    tracing::debug!(env = %config.env, api = %client.base_url(), "configuration loaded");
    let store = FileSessionStore::new(&config.session_path);

    match cli.command {
        Some(Commands::Home { limit }) => {
            catalog::run_home(&client, limit.unwrap_or(config.page_limit)).await;
        }
        Some(Commands::Products(args)) => catalog::run_products(&client, &args).await?,
        Some(Commands::Product { id }) => catalog::run_product(&client, &id).await,
        Some(Commands::Cart { command }) => {
            let session = SessionContext::ensure(&store)?;
            cart::run_cart(&client, &session, command).await?;
        }
        Some(Commands::Session) => {
            let session = SessionContext::ensure(&store)?;
            println!("{}", session.id());
            println!("stored in {}", store.path().display());
        }
        Some(Commands::Seed) => {
            let summary = client.seed_sample_data().await?;
            match summary.products_created {
                Some(n) => println!("{} ({n} products)", summary.message),
                None => println!("{}", summary.message),
            }
        }
        Some(Commands::Status) => {
            let status = client.api_status().await?;
            println!(
                "{} (version {})",
                status.message,
                status.version.as_deref().unwrap_or("unknown")
            );
        }
        Some(Commands::Config) => println!("{config:#?}"),
        None | Some(Commands::Shape { .. }) => {}
    }

    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests;
