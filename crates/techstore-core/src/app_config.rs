use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend origin without the `/api` prefix.
    pub backend_url: String,
    pub env: Environment,
    pub log_level: String,
    /// File that holds persisted client state (the `sessionId` key).
    pub session_path: PathBuf,
    /// `0` disables the request timeout.
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub page_limit: u32,
}

impl AppConfig {
    /// Root of the REST API: `<backend_url>/api`.
    #[must_use]
    pub fn api_base_url(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}
