//! Guest cart endpoints, scoped by session identifier.
//!
//! Every mutation returns the resulting [`Cart`]. When the backend embeds the
//! cart in its response it is used as-is; otherwise the cart is fetched once
//! more so callers never patch local state by hand.

use techstore_core::{Cart, CoreError, NewCartItem, Product, SessionId};

use super::StoreClient;
use crate::error::StoreError;
use crate::fallback;
use crate::types::MutationResponse;

impl StoreClient {
    /// Calls `GET /cart/{session_id}`. The backend creates an empty cart for
    /// unseen sessions.
    ///
    /// # Errors
    ///
    /// - [`StoreError::RemoteFetch`] on network failure or non-2xx status.
    /// - [`StoreError::Deserialize`] if the cart has an unexpected shape.
    pub async fn get_cart(&self, session: &SessionId) -> Result<Cart, StoreError> {
        let url = self.endpoint(&["cart", session.as_str()]);
        self.fetch_json(url, &format!("cart {session}")).await
    }

    /// Calls `POST /cart/{session_id}/items`.
    ///
    /// `selected_color` is sent as given, without checking it against the
    /// product's colours. The backend merges it into an existing line with the
    /// same product and colour.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Core`] with [`CoreError::InvalidQuantity`] if `quantity`
    ///   is zero; nothing is sent.
    /// - [`StoreError::NotFound`] if the backend does not know `product_id`.
    /// - [`StoreError::RemoteMutation`] on network failure or other non-2xx status.
    /// - [`StoreError::RemoteFetch`] if the follow-up cart fetch fails.
    pub async fn add_item(
        &self,
        session: &SessionId,
        product_id: &str,
        quantity: u32,
        selected_color: &str,
    ) -> Result<Cart, StoreError> {
        let item = NewCartItem::new(product_id, quantity, selected_color)?;
        self.add_cart_item(session, &item).await
    }

    /// [`StoreClient::add_item`] for a prepared request body.
    ///
    /// # Errors
    ///
    /// See [`StoreClient::add_item`].
    pub async fn add_cart_item(
        &self,
        session: &SessionId,
        item: &NewCartItem,
    ) -> Result<Cart, StoreError> {
        if item.quantity == 0 {
            return Err(CoreError::InvalidQuantity(item.quantity).into());
        }
        let url = self.endpoint(&["cart", session.as_str(), "items"]);
        let context = format!("cart {session}");
        tracing::debug!(%url, product_id = %item.product_id, quantity = item.quantity, "POST");
        let response = self
            .send_mutation(self.client.post(url).json(item), &context)
            .await?;
        self.settle(session, response).await
    }

    /// Calls `DELETE /cart/{session_id}/items/{item_id}`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the session has no cart.
    /// - [`StoreError::RemoteMutation`] on network failure or other non-2xx status.
    /// - [`StoreError::RemoteFetch`] if the follow-up cart fetch fails.
    pub async fn remove_item(
        &self,
        session: &SessionId,
        item_id: &str,
    ) -> Result<Cart, StoreError> {
        let url = self.endpoint(&["cart", session.as_str(), "items", item_id]);
        let context = format!("cart {session}");
        tracing::debug!(%url, item_id, "DELETE");
        let response = self
            .send_mutation(self.client.delete(url), &context)
            .await?;
        self.settle(session, response).await
    }

    /// Calls `DELETE /cart/{session_id}`. The session identifier itself is
    /// kept; only the items go.
    ///
    /// # Errors
    ///
    /// - [`StoreError::RemoteMutation`] on network failure or non-2xx status.
    /// - [`StoreError::RemoteFetch`] if the follow-up cart fetch fails.
    pub async fn clear_cart(&self, session: &SessionId) -> Result<Cart, StoreError> {
        let url = self.endpoint(&["cart", session.as_str()]);
        let context = format!("cart {session}");
        tracing::debug!(%url, "DELETE");
        let response = self
            .send_mutation(self.client.delete(url), &context)
            .await?;
        self.settle(session, response).await
    }

    /// Fetches the product behind each distinct line of `cart`, one
    /// `GET /products/{id}` per product. A product that cannot be fetched is
    /// logged and left out, so its line prices as unknown.
    pub async fn cart_products(&self, cart: &Cart) -> Vec<Product> {
        let mut requested: Vec<&str> = Vec::new();
        let mut products = Vec::new();
        for item in &cart.items {
            if requested.contains(&item.product_id.as_str()) {
                continue;
            }
            requested.push(&item.product_id);
            let fetched = self.get_product(&item.product_id).await.map(Some);
            if let Some(product) = fallback::or_default("cart product", fetched) {
                products.push(product);
            }
        }
        products
    }

    /// Resolves a mutation envelope to the cart it produced.
    async fn settle(
        &self,
        session: &SessionId,
        response: MutationResponse,
    ) -> Result<Cart, StoreError> {
        if let Some(message) = &response.message {
            tracing::debug!(session_id = %session, message = %message, "cart mutation accepted");
        }
        match response.cart {
            Some(cart) => Ok(cart),
            None => self.get_cart(session).await,
        }
    }
}

