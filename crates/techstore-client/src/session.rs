//! Guest session identity.
//!
//! The session identifier scopes every cart request. It is generated on first
//! use, persisted under the `sessionId` key, and reused on every later run.
//! Nothing in this crate ever deletes it; clearing the cart empties the items
//! but keeps the identifier.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::{Map, Value};
use techstore_core::SessionId;
use thiserror::Error;

/// Storage key for the persisted identifier.
pub const SESSION_KEY: &str = "sessionId";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session storage at {path} is not a JSON object: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value persistence for the session identifier.
pub trait SessionStore {
    /// Reads the stored identifier, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backing storage cannot be read.
    fn load(&self) -> Result<Option<SessionId>, SessionError>;

    /// Persists `id`, replacing any stored identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backing storage cannot be written.
    fn save(&self, id: &SessionId) -> Result<(), SessionError>;
}

/// Returns the persisted identifier, generating and persisting one first if
/// the store is empty.
///
/// # Errors
///
/// Returns [`SessionError`] if the store cannot be read or written.
pub fn ensure_session(store: &dyn SessionStore) -> Result<SessionId, SessionError> {
    if let Some(id) = store.load()? {
        return Ok(id);
    }
    let id = SessionId::generate();
    store.save(&id)?;
    tracing::info!(session_id = %id, "created guest session");
    Ok(id)
}

/// Session identity resolved once at start-up and passed to cart operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    id: SessionId,
}

impl SessionContext {
    /// # Errors
    ///
    /// See [`ensure_session`].
    pub fn ensure(store: &dyn SessionStore) -> Result<Self, SessionError> {
        ensure_session(store).map(|id| Self { id })
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }
}

/// JSON object on disk, the local-storage equivalent for a terminal client.
///
/// Other keys in the file are preserved on save.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, SessionError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&raw).map_err(|e| SessionError::Json {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<SessionId>, SessionError> {
        let map = self.read_map()?;
        Ok(map
            .get(SESSION_KEY)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(SessionId::new))
    }

    fn save(&self, id: &SessionId) -> Result<(), SessionError> {
        let mut map = self.read_map()?;
        map.insert(SESSION_KEY.to_string(), Value::String(id.as_str().to_string()));

        let io_err = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(&map).map_err(|e| SessionError::Json {
            path: self.path.clone(),
            source: e,
        })?;
        std::fs::write(&self.path, body).map_err(io_err)
    }
}

/// In-process store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<SessionId>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(id: SessionId) -> Self {
        Self {
            slot: Mutex::new(Some(id)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<SessionId>, SessionError> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn save(&self, id: &SessionId) -> Result<(), SessionError> {
        *self
            .slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(id.clone());
        Ok(())
    }
}
