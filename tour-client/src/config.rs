//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::{ClientError, ClientResult};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default directory of the file-backed session store
pub const DEFAULT_SESSION_DIR: &str = "./.tourism-session";

/// Client configuration for connecting to the tourism backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Directory holding the persisted session entries
    pub storage_dir: PathBuf,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT_SECS,
            storage_dir: PathBuf::from(DEFAULT_SESSION_DIR),
        }
    }

    /// Load configuration from the environment (and `.env` if present)
    ///
    /// | Variable                   | Default                      |
    /// |----------------------------|------------------------------|
    /// | `TOURISM_API_BASE_URL`     | `http://localhost:8080/api`  |
    /// | `TOURISM_API_TIMEOUT_SECS` | `30`                         |
    /// | `TOURISM_SESSION_DIR`      | `./.tourism-session`         |
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup("TOURISM_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        if base_url.trim().is_empty() {
            return Err(ClientError::Config("TOURISM_API_BASE_URL is empty".into()));
        }

        let timeout = match lookup("TOURISM_API_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("TOURISM_API_TIMEOUT_SECS must be a number, got {raw:?}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let storage_dir = lookup("TOURISM_SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_DIR));

        Ok(Self {
            base_url,
            timeout,
            storage_dir,
        })
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the session directory
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
