//! Response envelopes that are not domain types.

use serde::Deserialize;
use techstore_core::Cart;

/// Body of `GET /api/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiStatus {
    pub message: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Body of `POST /init-sample-data`. `products_created` is absent when the
/// catalog was already populated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedSummary {
    pub message: String,
    #[serde(default)]
    pub products_created: Option<u64>,
}

/// `{message, cart?}` envelope returned by cart mutations.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cart: Option<Cart>,
}
