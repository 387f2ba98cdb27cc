use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{wire, CoreError};

/// Storefront catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Laptop,
    Smartphone,
    Audio,
    Wearable,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Laptop,
        Category::Smartphone,
        Category::Audio,
        Category::Wearable,
    ];

    /// The exact string the backend stores and filters on.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Laptop => "Laptop",
            Category::Smartphone => "Smartphone",
            Category::Audio => "Audio",
            Category::Wearable => "Wearable",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Case-insensitive so CLI input like `laptop` resolves.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// A catalog product as served by `GET /products` and `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Free-form tag (`laptop`, `phone`, ...) that drives the 3D stand-in shape.
    pub product_type: String,
    /// Whole currency units (VND).
    #[serde(deserialize_with = "wire::price")]
    pub price: u64,
    /// Hex colour strings in display order.
    #[serde(default, deserialize_with = "wire::null_as_empty")]
    pub colors: Vec<String>,
    #[serde(default)]
    pub model_url: Option<String>,
    #[serde(default, deserialize_with = "wire::null_as_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "wire::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Colour preselected on the detail page: the first listed colour, or the
    /// showcase default when the product lists none.
    #[must_use]
    pub fn default_color(&self) -> &str {
        self.colors
            .first()
            .map_or(crate::shape::DEFAULT_COLOR, String::as_str)
    }
}
