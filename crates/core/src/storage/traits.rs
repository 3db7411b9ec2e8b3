use async_trait::async_trait;

use super::Result;

/// A value that can be stored by a [`StorageManager`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Key that uniquely identifies the record.
    type Key;

    /// Entity name used in error messages, e.g. `"product"`.
    const ENTITY: &'static str;

    /// Name of the key field used in error messages, e.g. `"sku"`.
    const KEY_NAME: &'static str;

    /// Returns the key of this record.
    fn key(&self) -> &Self::Key;
}

/// Storage contract for values of type `V` identified by keys of type `K`.
#[async_trait]
pub trait StorageManager<K, V>: Send + Sync
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    /// Stores a new record.
    async fn create(&self, value: &V) -> Result<()>;

    /// Returns the record identified by `key`, or `NotFound`.
    async fn obtain(&self, key: &K) -> Result<V>;

    /// Replaces the record identified by `key`, or returns `NotFound`.
    async fn update(&self, key: &K, value: &V) -> Result<()>;

    /// Removes the record identified by `key`, or returns `NotFound`.
    async fn delete(&self, key: &K) -> Result<()>;

    /// Returns every record. No ordering is guaranteed.
    async fn list(&self) -> Result<Vec<V>>;
}
