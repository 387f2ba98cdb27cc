use thiserror::Error;

use crate::session::SessionError;

/// Why a request to the backend did not produce a usable response.
#[derive(Debug, Error)]
pub enum RemoteFailure {
    /// Network, TLS, or body-read failure from the underlying HTTP client.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status other than 404.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

/// Errors returned by [`StoreClient`](crate::StoreClient).
#[derive(Debug, Error)]
pub enum StoreError {
    /// A GET against the catalog or cart failed.
    #[error("failed to fetch {context}: {cause}")]
    RemoteFetch {
        context: String,
        #[source]
        cause: RemoteFailure,
    },

    /// A POST or DELETE against the cart failed.
    #[error("failed to update {context}: {cause}")]
    RemoteMutation {
        context: String,
        #[source]
        cause: RemoteFailure,
    },

    /// The backend answered 404 (unknown product, missing cart).
    #[error("not found: {context}")]
    NotFound { context: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Rejected locally before any request was sent.
    #[error(transparent)]
    Core(#[from] techstore_core::CoreError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl StoreError {
    /// `true` for failures on read paths, which callers degrade to an empty view.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, StoreError::RemoteFetch { .. })
    }

    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, StoreError::RemoteMutation { .. })
    }

    /// HTTP status carried by the error, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::RemoteFetch { cause, .. } | StoreError::RemoteMutation { cause, .. } => {
                match cause {
                    RemoteFailure::Status(code) => Some(*code),
                    RemoteFailure::Http(e) => e.status().map(|s| s.as_u16()),
                }
            }
            StoreError::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}
