use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{wire, CoreError, Product};

/// Opaque client-generated token that scopes a guest cart on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps an existing identifier, e.g. one read back from storage.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Generates a fresh guest identifier: `guest_<unix-millis>_<8 hex>`.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_at(Utc::now())
    }

    /// Same as [`SessionId::generate`] with an explicit clock reading.
    #[must_use]
    pub fn generate_at(now: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("guest_{}_{}", now.timestamp_millis(), &suffix[..8]))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A guest cart as returned by `GET /cart/{session_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub session_id: String,
    #[serde(default, deserialize_with = "wire::null_as_empty")]
    pub items: Vec<CartItem>,
    #[serde(with = "wire::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "wire::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Cart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    #[must_use]
    pub fn find_item(&self, item_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Sum of `price * quantity` for every line whose product is in `catalog`.
    /// Lines referring to unknown products contribute nothing.
    #[must_use]
    pub fn subtotal(&self, catalog: &[Product]) -> u64 {
        self.items
            .iter()
            .filter_map(|item| {
                catalog
                    .iter()
                    .find(|p| p.id == item.product_id)
                    .map(|p| p.price.saturating_mul(u64::from(item.quantity)))
            })
            .fold(0u64, u64::saturating_add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    pub selected_color: String,
    #[serde(default, with = "wire::optional_timestamp")]
    pub added_at: Option<DateTime<Utc>>,
}

/// Request body for `POST /cart/{session_id}/items`.
///
/// `selected_color` is deliberately not checked against the product's colour
/// list; the backend is the authority on what it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCartItem {
    pub product_id: String,
    pub quantity: u32,
    pub selected_color: String,
}

impl NewCartItem {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidQuantity`] when `quantity` is zero.
    pub fn new(
        product_id: impl Into<String>,
        quantity: u32,
        selected_color: impl Into<String>,
    ) -> Result<Self, CoreError> {
        if quantity == 0 {
            return Err(CoreError::InvalidQuantity(quantity));
        }
        Ok(Self {
            product_id: product_id.into(),
            quantity,
            selected_color: selected_color.into(),
        })
    }
}
