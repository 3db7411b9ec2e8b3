use rust_decimal::Decimal;

use super::error::{ProductError, SkuError};
use super::types::{Product, Sku};

/// Literal every SKU starts with.
pub const SKU_PREFIX: &str = "FAL-";
/// Smallest accepted SKU suffix.
pub const MIN_SKU_SUFFIX: i64 = 1_000_000;
/// Largest accepted SKU suffix.
pub const MAX_SKU_SUFFIX: i64 = 99_999_999;

const MIN_TEXT_LEN: usize = 3;
const MAX_TEXT_LEN: usize = 50;

impl Sku {
    /// Checks the `FAL-<n>` format. The first failing rule wins.
    pub fn validate(&self) -> Result<(), SkuError> {
        let suffix = self
            .as_str()
            .strip_prefix(SKU_PREFIX)
            .ok_or(SkuError::MissingPrefix)?;

        let number: i64 = suffix.parse().map_err(|_| SkuError::SuffixNotANumber)?;

        if !(MIN_SKU_SUFFIX..=MAX_SKU_SUFFIX).contains(&number) {
            return Err(SkuError::InvalidSuffix(number));
        }

        Ok(())
    }
}

/// Lowest accepted price.
pub fn min_price() -> Decimal {
    Decimal::ONE
}

/// Highest accepted price.
pub fn max_price() -> Decimal {
    Decimal::from(99_999_999_u32)
}

/// Validates a product before creation or update.
///
/// Rules are checked in a fixed order and the first violation is returned.
pub fn validate_product(product: &Product) -> Result<(), ProductError> {
    product.sku.validate()?;

    validate_text(
        &product.name,
        ProductError::BlankName,
        ProductError::NameTooShort,
        ProductError::NameTooLarge,
    )?;
    validate_text(
        &product.brand,
        ProductError::BlankBrand,
        ProductError::BrandTooShort,
        ProductError::BrandTooLarge,
    )?;

    if product.size.as_deref().is_some_and(str::is_empty) {
        return Err(ProductError::BlankSize);
    }

    if product.price < min_price() || product.price > max_price() {
        return Err(ProductError::InvalidPrice);
    }

    if product.principal_image.is_none() {
        return Err(ProductError::MissingPrincipalImage);
    }

    Ok(())
}

fn validate_text(
    value: &str,
    blank: ProductError,
    too_short: ProductError,
    too_large: ProductError,
) -> Result<(), ProductError> {
    if value.is_empty() {
        return Err(blank);
    }
    if value.len() < MIN_TEXT_LEN {
        return Err(too_short);
    }
    if value.len() > MAX_TEXT_LEN {
        return Err(too_large);
    }
    Ok(())
}
