//! HTTP client for the storefront REST API.
//!
//! Wraps `reqwest` with typed responses and the fetch/mutation error split.
//! There is no caching and no retry: every call goes to the backend once, and
//! the backend stays the source of truth for catalog and cart contents.

mod cart;
mod catalog;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use techstore_core::AppConfig;

use crate::error::{RemoteFailure, StoreError};
use crate::types::{ApiStatus, MutationResponse, SeedSummary};

pub use catalog::ProductQuery;

/// Client for the storefront REST API rooted at `<backend>/api`.
///
/// Use [`StoreClient::from_config`] in the binary or [`StoreClient::new`] to
/// point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: Url,
}

/// Which half of the error taxonomy a request belongs to.
#[derive(Debug, Clone, Copy)]
enum Operation {
    Fetch,
    Mutation,
}

impl Operation {
    fn error(self, context: &str, cause: impl Into<RemoteFailure>) -> StoreError {
        let context = context.to_string();
        let cause = cause.into();
        match self {
            Operation::Fetch => StoreError::RemoteFetch { context, cause },
            Operation::Mutation => StoreError::RemoteMutation { context, cause },
        }
    }
}

impl StoreClient {
    /// Creates a client for the API root `api_base_url` (e.g.
    /// `https://shop.example.com/api`). `timeout` of `None` leaves requests
    /// unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidBaseUrl`] if `api_base_url` is not an
    /// absolute http(s) URL, or [`StoreError::RemoteFetch`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        api_base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, StoreError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Operation::Fetch.error("HTTP client construction", e))?;

        // Normalise to exactly one trailing slash so path segments append
        // below the API root instead of replacing its last segment.
        let normalised = format!("{}/", api_base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| StoreError::InvalidBaseUrl {
            url: api_base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(StoreError::InvalidBaseUrl {
                url: api_base_url.to_string(),
                reason: "expected an absolute http(s) URL".to_string(),
            });
        }

        Ok(Self { client, base_url })
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`StoreClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        Self::new(
            &config.api_base_url(),
            &config.user_agent,
            config.request_timeout(),
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Calls `GET /api/`, the backend's readiness message.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RemoteFetch`] on network failure or non-2xx status,
    /// or [`StoreError::Deserialize`] if the body has an unexpected shape.
    pub async fn api_status(&self) -> Result<ApiStatus, StoreError> {
        let url = self.endpoint(&[""]);
        self.fetch_json(url, "API status").await
    }

    /// Calls `POST /init-sample-data`. The backend only seeds an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RemoteMutation`] on network failure or non-2xx
    /// status, or [`StoreError::Deserialize`] if the body has an unexpected shape.
    pub async fn seed_sample_data(&self) -> Result<SeedSummary, StoreError> {
        let url = self.endpoint(&["init-sample-data"]);
        let context = "sample data";
        tracing::debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| Operation::Mutation.error(context, e))?;
        let body = Self::read_body(response, context, Operation::Mutation).await?;
        Self::decode(&body, context)
    }

    /// Builds `<base>/<segments...>` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a GET and decodes the JSON body as `T`.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, StoreError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Operation::Fetch.error(context, e))?;
        let body = Self::read_body(response, context, Operation::Fetch).await?;
        Self::decode(&body, context)
    }

    /// Sends a prepared POST/DELETE and decodes the `{message, cart?}` envelope.
    /// An empty body is treated as an envelope with neither field.
    async fn send_mutation(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<MutationResponse, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| Operation::Mutation.error(context, e))?;
        let body = Self::read_body(response, context, Operation::Mutation).await?;
        if body.trim().is_empty() {
            return Ok(MutationResponse::default());
        }
        Self::decode(&body, context)
    }

    /// Maps 404 to [`StoreError::NotFound`], any other non-2xx to the
    /// operation's remote error, and returns the body text otherwise.
    async fn read_body(
        response: Response,
        context: &str,
        op: Operation,
    ) -> Result<String, StoreError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                context: context.to_string(),
            });
        }
        if !status.is_success() {
            return Err(op.error(context, RemoteFailure::Status(status.as_u16())));
        }
        response.text().await.map_err(|e| op.error(context, e))
    }

    fn decode<T: DeserializeOwned>(body: &str, context: &str) -> Result<T, StoreError> {
        serde_json::from_str(body).map_err(|e| StoreError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}
