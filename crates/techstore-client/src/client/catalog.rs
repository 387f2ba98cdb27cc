//! Catalog endpoints: product listings and product detail.

use techstore_core::{Category, Product};

use super::StoreClient;
use crate::error::StoreError;
use crate::sequence::RequestSequencer;

/// Server-side filters for `GET /products`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub featured: Option<bool>,
    pub limit: Option<u32>,
    pub category: Option<Category>,
    pub product_type: Option<String>,
}

impl ProductQuery {
    #[must_use]
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        if let Some(product_type) = &self.product_type {
            pairs.push(("product_type", product_type.clone()));
        }
        pairs
    }

    fn describe(&self) -> String {
        let pairs = self.pairs();
        if pairs.is_empty() {
            return "products".to_string();
        }
        let filters = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("products ({filters})")
    }
}

impl StoreClient {
    /// Calls `GET /products` with the query's filters.
    ///
    /// Elements that do not decode as a [`Product`] (an unknown category, a
    /// negative price) are logged and skipped; the rest of the listing is kept.
    ///
    /// # Errors
    ///
    /// - [`StoreError::RemoteFetch`] on network failure or non-2xx status.
    /// - [`StoreError::Deserialize`] if the body is not a JSON array.
    pub async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, StoreError> {
        let mut url = self.endpoint(&["products"]);
        {
            let pairs = query.pairs();
            if !pairs.is_empty() {
                let mut qp = url.query_pairs_mut();
                for (k, v) in &pairs {
                    qp.append_pair(k, v);
                }
            }
        }
        let context = query.describe();
        let items: Vec<serde_json::Value> = self.fetch_json(url, &context).await?;
        Ok(decode_listing(items, &context))
    }

    /// Home page listing: featured products, at most `limit`.
    ///
    /// # Errors
    ///
    /// See [`StoreClient::list_products`].
    pub async fn featured_products(&self, limit: u32) -> Result<Vec<Product>, StoreError> {
        self.list_products(&ProductQuery::default().featured(true).limit(limit))
            .await
    }

    /// Category page listing.
    ///
    /// # Errors
    ///
    /// See [`StoreClient::list_products`].
    pub async fn products_in_category(
        &self,
        category: Category,
    ) -> Result<Vec<Product>, StoreError> {
        self.list_products(&ProductQuery::default().category(category))
            .await
    }

    /// Like [`StoreClient::list_products`], but last-request-wins: returns
    /// `Ok(None)` if `sequencer` issued a newer token while this request was
    /// in flight. Errors from superseded requests are dropped too.
    ///
    /// # Errors
    ///
    /// See [`StoreClient::list_products`]. Only the current request reports errors.
    pub async fn list_products_latest(
        &self,
        sequencer: &RequestSequencer,
        query: &ProductQuery,
    ) -> Result<Option<Vec<Product>>, StoreError> {
        let token = sequencer.issue();
        let result = self.list_products(query).await;
        let Some(result) = sequencer.accept(token, result) else {
            tracing::debug!(
                token = token.value(),
                query = %query.describe(),
                "discarding superseded product listing"
            );
            return Ok(None);
        };
        result.map(Some)
    }

    /// Calls `GET /products/{id}`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the backend has no such product.
    /// - [`StoreError::RemoteFetch`] on network failure or other non-2xx status.
    /// - [`StoreError::Deserialize`] if the response has an unexpected shape.
    pub async fn get_product(&self, product_id: &str) -> Result<Product, StoreError> {
        let url = self.endpoint(&["products", product_id]);
        self.fetch_json(url, &format!("product {product_id}")).await
    }
}

fn decode_listing(items: Vec<serde_json::Value>, context: &str) -> Vec<Product> {
    items
        .into_iter()
        .filter_map(|item| {
            let id = item
                .get("id")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<no id>")
                .to_string();
            match serde_json::from_value::<Product>(item) {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!(
                        context,
                        product_id = %id,
                        error = %e,
                        "skipping malformed product"
                    );
                    None
                }
            }
        })
        .collect()
}
