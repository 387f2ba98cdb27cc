pub mod app_config;
pub mod cart;
pub mod config;
pub mod filter;
pub mod presentation;
pub mod products;
pub mod shape;
pub mod wire;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use cart::{Cart, CartItem, NewCartItem, SessionId};
pub use config::{load_app_config, load_app_config_from_env};
pub use filter::{apply, sort_products, FilterConfig, PriceRange, SortKey};
pub use presentation::{color_name, format_price, PALETTE};
pub use products::{Category, Product};
pub use shape::{select_shape, try_select_shape, Geometry, ProductKind, ShapeDescriptor, Spin};

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid price range: lower bound {min} exceeds upper bound {max}")]
    InvalidPriceRange { min: u64, max: u64 },

    #[error("unknown product type: {0}")]
    UnknownProductType(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("quantity must be a positive integer, got {0}")]
    InvalidQuantity(u32),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
