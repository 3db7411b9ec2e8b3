use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::serde::deserialize_optional_url;
use crate::storage::Record;

/// Stock-keeping unit, the candidate identifier of a product.
///
/// Constructing a `Sku` never fails; use [`Sku::validate`] to check the format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Sku {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A product in the catalog.
///
/// Every field falls back to its default when missing from the payload, so a
/// partially filled body decodes and is then rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub sku: Sku,
    /// Short description of the product.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub size: Option<String>,
    /// Sell price.
    #[serde(default)]
    pub price: Decimal,
    /// Image used in catalogs and shown first on the product detail page.
    #[serde(default, deserialize_with = "deserialize_optional_url")]
    pub principal_image: Option<Url>,
    #[serde(default)]
    pub other_images: Vec<Url>,
}

impl Product {
    /// Creates a product with the required fields and no size or extra images.
    pub fn new(
        sku: impl Into<Sku>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Decimal,
        principal_image: Url,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            brand: brand.into(),
            size: None,
            price,
            principal_image: Some(principal_image),
            other_images: Vec::new(),
        }
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_other_images(mut self, images: impl IntoIterator<Item = Url>) -> Self {
        self.other_images = images.into_iter().collect();
        self
    }
}

impl Record for Product {
    type Key = Sku;

    const ENTITY: &'static str = "product";

    const KEY_NAME: &'static str = "sku";

    fn key(&self) -> &Sku {
        &self.sku
    }
}
