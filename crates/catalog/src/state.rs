//! Application state shared by the request handlers.

use catalog_core::product::ProductManager;

use crate::config::Config;
use crate::storage::{self, ProductStorage};

/// Shared application state.
///
/// Cloned for each request handler. Cloning is cheap, the storage behind the
/// manager is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductManager,
}

impl AppState {
    /// Creates the state with the storage backend named by `config`.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let storage = storage::open(config).await?;
        Ok(Self::with_storage(storage))
    }

    pub fn with_storage(storage: ProductStorage) -> Self {
        Self {
            products: ProductManager::new(storage),
        }
    }
}
