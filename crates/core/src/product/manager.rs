//! Business layer for products.
//!
//! Every operation validates its input before reaching the storage manager, so
//! malformed requests never cost a storage round-trip.

use std::sync::Arc;

use crate::storage::StorageManager;

use super::error::{ManagerError, ProductError};
use super::types::{Product, Sku};
use super::validation::validate_product;

pub type Result<T> = std::result::Result<T, ManagerError>;

/// Validates product operations and delegates them to a storage manager.
#[derive(Clone)]
pub struct ProductManager {
    storage: Arc<dyn StorageManager<Sku, Product>>,
}

impl ProductManager {
    pub fn new(storage: Arc<dyn StorageManager<Sku, Product>>) -> Self {
        Self { storage }
    }

    /// Validates the product and stores it as a new record.
    pub async fn create_product(&self, product: &Product) -> Result<()> {
        validate_product(product)?;

        self.storage.create(product).await?;

        tracing::info!(sku = %product.sku, name = %product.name, "Created product");
        Ok(())
    }

    /// Returns the product identified by `sku`.
    pub async fn obtain_product(&self, sku: &Sku) -> Result<Product> {
        sku.validate()?;

        Ok(self.storage.obtain(sku).await?)
    }

    /// Replaces the product identified by `sku` with `product`.
    ///
    /// The SKU inside the product must match `sku`; renaming a product is not an update.
    pub async fn update_product(&self, sku: &Sku, product: &Product) -> Result<()> {
        sku.validate()?;
        validate_product(product)?;

        if product.sku != *sku {
            return Err(ProductError::SkuMismatch {
                path: sku.to_string(),
                body: product.sku.to_string(),
            }
            .into());
        }

        self.storage.update(sku, product).await?;

        tracing::info!(sku = %sku, "Updated product");
        Ok(())
    }

    /// Removes the product identified by `sku`.
    pub async fn delete_product(&self, sku: &Sku) -> Result<()> {
        sku.validate()?;

        self.storage.delete(sku).await?;

        tracing::info!(sku = %sku, "Deleted product");
        Ok(())
    }

    /// Returns every stored product.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.storage.list().await?)
    }
}
