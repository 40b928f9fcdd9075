//! Document store configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// URL scheme selecting the in-process store.
pub const MEMORY_URL: &str = "memory://";

/// Which store backend a URL selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    InMemory,
}

/// Document store configuration
///
/// Both settings are optional: without a `url` the service runs with no
/// store, reads report zero/absent and writes fail. The URL may carry
/// credentials, so it is held as a secret and redacted from `Debug`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Store location (`postgres://…`, `postgresql://…` or `memory://`)
    pub url: Option<SecretString>,

    /// Store name, reported by diagnostics
    pub name: Option<String>,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Run migrations on startup
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Whether a store location was configured at all
    pub fn url_present(&self) -> bool {
        self.trimmed_url().is_some()
    }

    /// The configured URL without surrounding whitespace, `None` if blank
    pub fn trimmed_url(&self) -> Option<&str> {
        self.url
            .as_ref()
            .map(|u| u.expose_secret().trim())
            .filter(|u| !u.is_empty())
    }

    /// Backend selected by the URL scheme, `None` when no URL is set
    pub fn store_kind(&self) -> Result<Option<StoreKind>, ValidationError> {
        let Some(url) = self.trimmed_url() else {
            return Ok(None);
        };
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Some(StoreKind::Postgres))
        } else if url == MEMORY_URL {
            Ok(Some(StoreKind::InMemory))
        } else {
            Err(ValidationError::InvalidDatabaseUrl)
        }
    }

    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.store_kind()?;
        if self.max_connections == 0 || self.max_connections > 100 {
            return Err(ValidationError::InvalidPoolSize);
        }
        if self.acquire_timeout_secs == 0 {
            return Err(ValidationError::InvalidAcquireTimeout);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: None,
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            run_migrations: false,
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_acquire_timeout() -> u64 {
    5
}
