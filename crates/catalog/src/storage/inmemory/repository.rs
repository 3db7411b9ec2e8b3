//! In-memory storage implementation.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::storage::{Record, RepositoryError, Result, StorageManager};

/// Map-backed storage for any [`Record`].
///
/// `create` overwrites an existing record with the same key instead of
/// reporting a conflict. Data is not persisted and is lost when the last
/// clone is dropped.
#[derive(Debug)]
pub struct InMemoryStorage<K, V> {
    records: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Clone for InMemoryStorage<K, V> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<K, V> Default for InMemoryStorage<K, V> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<K, V> InMemoryStorage<K, V>
where
    K: Eq + Hash + Clone,
    V: Record<Key = K>,
{
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    #[cfg(test)]
    pub fn with_records(records: impl IntoIterator<Item = V>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.key().clone(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of stored records.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl<K, V> StorageManager<K, V> for InMemoryStorage<K, V>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Record<Key = K>,
{
    async fn create(&self, value: &V) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(value.key().clone(), value.clone());
        Ok(())
    }

    async fn obtain(&self, key: &K) -> Result<V> {
        let records = self.records.read().await;
        records.get(key).cloned().ok_or_else(|| RepositoryError::not_found::<V>(key))
    }

    async fn update(&self, key: &K, value: &V) -> Result<()> {
        let mut records = self.records.write().await;
        match records.get_mut(key) {
            Some(existing) => {
                *existing = value.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found::<V>(key)),
        }
    }

    async fn delete(&self, key: &K) -> Result<()> {
        let mut records = self.records.write().await;
        if records.remove(key).is_none() {
            return Err(RepositoryError::not_found::<V>(key));
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<V>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use catalog_core::product::{Product, Sku};
    use catalog_core::storage::RecordId;
    use rust_decimal::Decimal;
    use url::Url;

    type ProductStorage = InMemoryStorage<Sku, Product>;

    fn product(sku: &str) -> Product {
        Product::new(
            sku,
            "Running Shoes",
            "Nike",
            Decimal::new(4999, 2),
            Url::parse("https://example.com/shoe.png").unwrap(),
        )
        .with_size("M")
        .with_other_images([Url::parse("https://example.com/side.png").unwrap()])
    }

    // ==================== Create / Obtain Tests ====================

    #[tokio::test]
    async fn test_create_and_obtain_round_trip() {
        let storage = ProductStorage::new();
        let created = product("FAL-12345678");

        storage.create(&created).await.unwrap();

        let obtained = storage.obtain(&created.sku).await.unwrap();
        assert_eq!(obtained, created);
    }

    #[tokio::test]
    async fn test_obtain_from_empty_store_is_not_found() {
        let storage = ProductStorage::new();

        let result = storage.obtain(&Sku::from("FAL-12345678")).await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound(RecordId::new(
                "product",
                "sku",
                "FAL-12345678"
            )))
        );
    }

    #[tokio::test]
    async fn test_create_overwrites_existing_key() {
        let storage = ProductStorage::new();
        let mut created = product("FAL-12345678");
        storage.create(&created).await.unwrap();

        created.name = "Trail Shoes".to_string();
        storage.create(&created).await.unwrap();

        assert_eq!(storage.len().await, 1);
        let obtained = storage.obtain(&created.sku).await.unwrap();
        assert_eq!(obtained.name, "Trail Shoes");
    }

    // ==================== Update Tests ====================

    #[tokio::test]
    async fn test_update_replaces_record() {
        let storage = ProductStorage::with_records([product("FAL-12345678")]);
        let mut changed = product("FAL-12345678");
        changed.size = None;
        changed.other_images.clear();

        storage.update(&changed.sku, &changed).await.unwrap();

        let obtained = storage.obtain(&changed.sku).await.unwrap();
        assert_eq!(obtained, changed);
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let storage = ProductStorage::new();
        let missing = product("FAL-12345678");

        let result = storage.update(&missing.sku, &missing).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert_eq!(storage.len().await, 0);
    }

    // ==================== Delete Tests ====================

    #[tokio::test]
    async fn test_delete_then_obtain_is_not_found() {
        let storage = ProductStorage::with_records([product("FAL-12345678")]);
        let sku = Sku::from("FAL-12345678");

        storage.delete(&sku).await.unwrap();

        let result = storage.obtain(&sku).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let storage = ProductStorage::new();

        let result = storage.delete(&Sku::from("FAL-12345678")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    // ==================== List Tests ====================

    #[tokio::test]
    async fn test_list_returns_all_records() {
        let storage =
            ProductStorage::with_records([product("FAL-1000000"), product("FAL-99999999")]);

        let mut listed = storage.list().await.unwrap();
        listed.sort_by(|a, b| a.sku.cmp(&b.sku));

        assert_eq!(listed, vec![product("FAL-1000000"), product("FAL-99999999")]);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let storage = ProductStorage::new();
        let clone = storage.clone();

        clone.create(&product("FAL-12345678")).await.unwrap();

        assert_eq!(storage.len().await, 1);
    }
}
