//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Every repository operation maps to exactly one of the
//! statements below.

/// SQL statement to create the products table.
pub const CREATE_TABLES: &str = r#"
-- Products table
CREATE TABLE IF NOT EXISTS products (
    sku TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    brand TEXT NOT NULL,
    size TEXT,
    price TEXT NOT NULL,
    principal_image TEXT NOT NULL,
    other_images TEXT NOT NULL DEFAULT '[]'
);
"#;

pub const INSERT_PRODUCT: &str = r#"
INSERT INTO products (sku, name, brand, size, price, principal_image, other_images)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
"#;

pub const SELECT_PRODUCT_BY_SKU: &str = r#"
SELECT sku, name, brand, size, price, principal_image, other_images
FROM products
WHERE sku = ?1
"#;

pub const SELECT_PRODUCTS: &str = r#"
SELECT sku, name, brand, size, price, principal_image, other_images
FROM products
"#;

pub const UPDATE_PRODUCT: &str = r#"
UPDATE products
SET name = ?2, brand = ?3, size = ?4, price = ?5, principal_image = ?6, other_images = ?7
WHERE sku = ?1
"#;

pub const DELETE_PRODUCT: &str = r#"
DELETE FROM products
WHERE sku = ?1
"#;
