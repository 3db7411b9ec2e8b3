//! SQLite repository implementation.
//!
//! Implements [`StorageManager`] from `catalog_core::storage` for products.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use catalog_core::product::{Product, Sku};
use catalog_core::storage::{RecordId, RepositoryError, Result, StorageManager};

use super::conversions::{row_to_product, ProductRow};
use super::error::{map_query_error, map_record_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Fails with "no rows" when a statement did not touch any row, which the
/// error mapping turns into `NotFound`.
fn expect_affected(rows: usize) -> std::result::Result<(), tokio_rusqlite::Error> {
    if rows == 0 {
        Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
    } else {
        Ok(())
    }
}

/// SQLite-backed product store.
///
/// `create` on an existing SKU fails with `Duplicated`.
pub struct SqliteProductStore {
    conn: Connection,
}

impl SqliteProductStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_query_error)
    }
}

#[async_trait]
impl StorageManager<Sku, Product> for SqliteProductStore {
    async fn create(&self, product: &Product) -> Result<()> {
        let row = ProductRow::from_product(product)?;

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_PRODUCT,
                    rusqlite::params![
                        row.sku,
                        row.name,
                        row.brand,
                        row.size,
                        row.price,
                        row.principal_image,
                        row.other_images
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_record_error(e, RecordId::of::<Product>(&product.sku)))
    }

    async fn obtain(&self, sku: &Sku) -> Result<Product> {
        let sku_str = sku.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_PRODUCT_BY_SKU)
                    .map_err(wrap_err)?;
                stmt.query_row([&sku_str], row_to_product).map_err(wrap_err)
            })
            .await
            .map_err(|e| map_record_error(e, RecordId::of::<Product>(sku)))
    }

    async fn update(&self, sku: &Sku, product: &Product) -> Result<()> {
        let mut row = ProductRow::from_product(product)?;
        row.sku = sku.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_PRODUCT,
                        rusqlite::params![
                            row.sku,
                            row.name,
                            row.brand,
                            row.size,
                            row.price,
                            row.principal_image,
                            row.other_images
                        ],
                    )
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_record_error(e, RecordId::of::<Product>(sku)))
    }

    async fn delete(&self, sku: &Sku) -> Result<()> {
        let sku_str = sku.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_PRODUCT, [&sku_str])
                    .map_err(wrap_err)?;
                expect_affected(rows)
            })
            .await
            .map_err(|e| map_record_error(e, RecordId::of::<Product>(sku)))
    }

    async fn list(&self) -> Result<Vec<Product>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_PRODUCTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_product).map_err(wrap_err)?;

                let mut products = Vec::new();
                for row_result in rows {
                    products.push(row_result.map_err(wrap_err)?);
                }
                Ok(products)
            })
            .await
            .map_err(map_query_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal::Decimal;
    use url::Url;

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

    async fn store() -> SqliteProductStore {
        SqliteProductStore::new_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_new_in_memory() {
        let store = SqliteProductStore::new_in_memory().await;
        assert!(store.is_ok());
    }

    #[tokio::test]
    async fn test_new_with_invalid_path_fails() {
        let result = SqliteProductStore::new("/nonexistent-dir/catalog.db").await;
        assert!(result.is_err());
    }

    // ==================== Create / Obtain Tests ====================

    #[tokio::test]
    async fn test_create_and_obtain_round_trip() {
        let store = store().await;
        let created = product("FAL-12345678");

        store.create(&created).await.unwrap();

        let obtained = store.obtain(&created.sku).await.unwrap();
        assert_eq!(obtained, created);
    }

    #[tokio::test]
    async fn test_create_without_optional_fields() {
        let store = store().await;
        let mut created = product("FAL-1000000");
        created.size = None;
        created.other_images.clear();

        store.create(&created).await.unwrap();

        let obtained = store.obtain(&created.sku).await.unwrap();
        assert_eq!(obtained.size, None);
        assert!(obtained.other_images.is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_is_duplicated() {
        let store = store().await;
        store.create(&product("FAL-12345678")).await.unwrap();

        let result = store.create(&product("FAL-12345678")).await;

        assert_eq!(
            result,
            Err(RepositoryError::Duplicated(RecordId::new(
                "product",
                "sku",
                "FAL-12345678"
            )))
        );
    }

    #[tokio::test]
    async fn test_obtain_nonexistent_is_not_found() {
        let store = store().await;

        let result = store.obtain(&Sku::from("FAL-12345678")).await;

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
    async fn test_price_keeps_precision() {
        let store = store().await;
        let mut created = product("FAL-12345678");
        created.price = Decimal::new(123_456_789, 4);

        store.create(&created).await.unwrap();

        let obtained = store.obtain(&created.sku).await.unwrap();
        assert_eq!(obtained.price, Decimal::new(123_456_789, 4));
    }

    // ==================== Update Tests ====================

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = store().await;
        store.create(&product("FAL-12345678")).await.unwrap();

        let mut changed = product("FAL-12345678");
        changed.name = "Trail Shoes".to_string();
        changed.size = None;
        changed.price = Decimal::from(120);
        store.update(&changed.sku, &changed).await.unwrap();

        let obtained = store.obtain(&changed.sku).await.unwrap();
        assert_eq!(obtained, changed);
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let store = store().await;
        let missing = product("FAL-12345678");

        let result = store.update(&missing.sku, &missing).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
        assert!(store.list().await.unwrap().is_empty());
    }

    // ==================== Delete Tests ====================

    #[tokio::test]
    async fn test_delete_then_obtain_is_not_found() {
        let store = store().await;
        let sku = Sku::from("FAL-12345678");
        store.create(&product("FAL-12345678")).await.unwrap();

        store.delete(&sku).await.unwrap();

        let result = store.obtain(&sku).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let store = store().await;

        let result = store.delete(&Sku::from("FAL-12345678")).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    // ==================== List Tests ====================

    #[tokio::test]
    async fn test_list_empty() {
        let store = store().await;

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_returns_all_products() {
        let store = store().await;
        store.create(&product("FAL-1000000")).await.unwrap();
        store.create(&product("FAL-99999999")).await.unwrap();

        let mut listed = store.list().await.unwrap();
        listed.sort_by(|a, b| a.sku.cmp(&b.sku));

        assert_eq!(listed, vec![product("FAL-1000000"), product("FAL-99999999")]);
    }
}
