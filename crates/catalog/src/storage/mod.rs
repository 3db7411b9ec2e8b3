//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `StorageManager` trait
//! defined in `catalog_core::storage`. The backend is selected at startup from
//! [`Config::storage_backend`].
//!
//! - `sqlite` (default): SQLite storage using `rusqlite` and `tokio-rusqlite`
//! - `memory`: process-local map, nothing survives a restart

pub mod inmemory;
pub mod sqlite;

use std::sync::Arc;

use catalog_core::product::{Product, Sku};
use catalog_core::storage::{Result, StorageManager};

use crate::config::{Config, StorageBackend};

pub use inmemory::InMemoryStorage;
pub use sqlite::SqliteProductStore;

/// Product storage shared by all request handlers.
pub type ProductStorage = Arc<dyn StorageManager<Sku, Product>>;

/// Opens the storage backend named by the configuration.
pub async fn open(config: &Config) -> Result<ProductStorage> {
    let storage: ProductStorage = match config.storage_backend {
        StorageBackend::Sqlite => {
            tracing::info!(path = %config.sqlite_path, "Opening SQLite product storage");
            Arc::new(SqliteProductStore::new(&config.sqlite_path).await?)
        }
        StorageBackend::Memory => {
            tracing::info!("Using in-memory product storage");
            Arc::new(InMemoryStorage::<Sku, Product>::new())
        }
    };

    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(storage_backend: StorageBackend, sqlite_path: &str) -> Config {
        Config {
            storage_backend,
            sqlite_path: sqlite_path.to_string(),
            request_timeout_seconds: 10,
        }
    }

    #[tokio::test]
    async fn test_open_memory_backend() {
        let storage = open(&config(StorageBackend::Memory, "unused.db"))
            .await
            .unwrap();

        assert!(storage.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_sqlite_backend_in_memory() {
        let storage = open(&config(StorageBackend::Sqlite, ":memory:"))
            .await
            .unwrap();

        assert!(storage.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_sqlite_backend_with_bad_path_fails() {
        let result = open(&config(StorageBackend::Sqlite, "/nonexistent-dir/catalog.db")).await;

        assert!(result.is_err());
    }
}
