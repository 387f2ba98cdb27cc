pub mod client;
pub mod error;
pub mod fallback;
pub mod sequence;
pub mod session;
pub mod types;

pub use client::{ProductQuery, StoreClient};
pub use error::{RemoteFailure, StoreError};
pub use sequence::{RequestSequencer, RequestToken};
pub use session::{
    ensure_session, FileSessionStore, MemorySessionStore, SessionContext, SessionError,
    SessionStore, SESSION_KEY,
};
pub use types::{ApiStatus, SeedSummary};
