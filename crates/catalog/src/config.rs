use std::{env, fmt, str::FromStr, time::Duration};

use thiserror::Error;

/// Storage backend used to persist products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// SQLite database at [`Config::sqlite_path`].
    #[default]
    Sqlite,
    /// Process-local map. Data is lost on restart.
    Memory,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown storage backend '{0}' (expected 'sqlite' or 'memory')")]
pub struct UnknownStorageBackend(String);

impl FromStr for StorageBackend {
    type Err = UnknownStorageBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" | "inmemory" => Ok(Self::Memory),
            other => Err(UnknownStorageBackend(other.to_string())),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend (default: sqlite)
    pub storage_backend: StorageBackend,
    /// Path to SQLite database file (default: "catalog.db")
    pub sqlite_path: String,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STORAGE_BACKEND` - `sqlite` or `memory` (default: sqlite)
    /// - `SQLITE_PATH` - SQLite database path (default: "catalog.db")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            storage_backend: env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|v| {
                    v.parse::<StorageBackend>()
                        .map_err(|e| {
                            tracing::warn!(error = %e, "Falling back to the default storage backend");
                        })
                        .ok()
                })
                .unwrap_or_default(),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "catalog.db".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}
