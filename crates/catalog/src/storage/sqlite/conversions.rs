//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use std::str::FromStr;

use catalog_core::product::{Product, Sku};
use catalog_core::storage::RepositoryError;
use rusqlite::Row;
use rust_decimal::Decimal;
use url::Url;

/// Column values of a product, ready to bind in `INSERT`/`UPDATE` order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub sku: String,
    pub name: String,
    pub brand: String,
    pub size: Option<String>,
    pub price: String,
    pub principal_image: String,
    pub other_images: String,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Result<Self, RepositoryError> {
        Ok(Self {
            sku: product.sku.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            size: product.size.clone(),
            price: format_price(&product.price),
            principal_image: product
                .principal_image
                .as_ref()
                .map(|url| url.to_string())
                .unwrap_or_default(),
            other_images: images_to_json(&product.other_images)?,
        })
    }
}

/// Convert a SQLite row to a Product.
///
/// Expected columns: sku, name, brand, size, price, principal_image, other_images
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    let sku: String = row.get(0)?;
    let name: String = row.get(1)?;
    let brand: String = row.get(2)?;
    let size: Option<String> = row.get(3)?;
    let price: String = row.get(4)?;
    let principal_image: String = row.get(5)?;
    let other_images: String = row.get(6)?;

    Ok(Product {
        sku: Sku::from(sku),
        name,
        brand,
        size,
        price: parse_price(&price)?,
        principal_image: parse_optional_url(&principal_image)?,
        other_images: json_to_images(&other_images)?,
    })
}

/// Format a price for storage.
///
/// Stored as text so no precision is lost to SQLite's REAL affinity.
pub fn format_price(price: &Decimal) -> String {
    price.normalize().to_string()
}

/// Serialize image URLs to a JSON array.
pub fn images_to_json(images: &[Url]) -> Result<String, RepositoryError> {
    serde_json::to_string(images).map_err(|e| RepositoryError::Encoding(e.to_string()))
}

// ============================================================================
// Helper functions
// ============================================================================

fn conversion_failure(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_price(s: &str) -> rusqlite::Result<Decimal> {
    Decimal::from_str(s).map_err(|e| conversion_failure(4, e))
}

/// An empty column means the product has no principal image.
fn parse_optional_url(s: &str) -> rusqlite::Result<Option<Url>> {
    if s.is_empty() {
        return Ok(None);
    }
    Url::parse(s).map(Some).map_err(|e| conversion_failure(5, e))
}

fn json_to_images(json: &str) -> rusqlite::Result<Vec<Url>> {
    serde_json::from_str(json).map_err(|e| conversion_failure(6, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new(
            "FAL-12345678",
            "Running Shoes",
            "Nike",
            Decimal::new(4999, 2),
            Url::parse("https://example.com/shoe.png").unwrap(),
        )
        .with_size("M")
        .with_other_images([
            Url::parse("https://example.com/side.png").unwrap(),
            Url::parse("https://example.com/back.png").unwrap(),
        ])
    }

    #[test]
    fn test_product_row_from_product() {
        let row = ProductRow::from_product(&product()).unwrap();

        assert_eq!(row.sku, "FAL-12345678");
        assert_eq!(row.name, "Running Shoes");
        assert_eq!(row.brand, "Nike");
        assert_eq!(row.size.as_deref(), Some("M"));
        assert_eq!(row.price, "49.99");
        assert_eq!(row.principal_image, "https://example.com/shoe.png");
        assert_eq!(
            row.other_images,
            r#"["https://example.com/side.png","https://example.com/back.png"]"#
        );
    }

    #[test]
    fn test_product_row_without_principal_image_is_empty() {
        let mut without_image = product();
        without_image.principal_image = None;

        let row = ProductRow::from_product(&without_image).unwrap();

        assert_eq!(row.principal_image, "");
    }

    #[test]
    fn test_format_price_drops_trailing_zeros() {
        assert_eq!(format_price(&Decimal::new(150, 2)), "1.5");
        assert_eq!(format_price(&Decimal::from(99_999_999_u32)), "99999999");
    }

    #[test]
    fn test_parse_price_valid() {
        assert_eq!(parse_price("49.99").unwrap(), Decimal::new(4999, 2));
    }

    #[test]
    fn test_parse_price_invalid() {
        let result = parse_price("forty-nine");
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(4, _, _))
        ));
    }

    #[test]
    fn test_parse_optional_url() {
        assert_eq!(parse_optional_url("").unwrap(), None);
        assert_eq!(
            parse_optional_url("https://example.com/shoe.png").unwrap(),
            Some(Url::parse("https://example.com/shoe.png").unwrap())
        );
        assert!(parse_optional_url("not a url").is_err());
    }

    #[test]
    fn test_images_json_empty_array() {
        assert_eq!(images_to_json(&[]).unwrap(), "[]");
        assert!(json_to_images("[]").unwrap().is_empty());
    }

    #[test]
    fn test_json_to_images_rejects_malformed_json() {
        assert!(json_to_images("not json").is_err());
        assert!(json_to_images(r#"["not a url"]"#).is_err());
    }
}
