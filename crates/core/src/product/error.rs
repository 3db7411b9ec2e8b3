use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors produced by the SKU format check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkuError {
    #[error("missing prefix 'FAL-'")]
    MissingPrefix,
    #[error("suffix is not a number")]
    SuffixNotANumber,
    #[error("invalid suffix '{0}'")]
    InvalidSuffix(i64),
}

/// Errors produced when a product fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    #[error(transparent)]
    Sku(#[from] SkuError),
    #[error("product name must not be blank")]
    BlankName,
    #[error("product name is too short")]
    NameTooShort,
    #[error("product name is too large")]
    NameTooLarge,
    #[error("product brand must not be blank")]
    BlankBrand,
    #[error("product brand is too short")]
    BrandTooShort,
    #[error("product brand is too large")]
    BrandTooLarge,
    #[error("product size must not be blank")]
    BlankSize,
    #[error("invalid product price")]
    InvalidPrice,
    #[error("principal image for product is required")]
    MissingPrincipalImage,
    #[error("product sku '{body}' does not match '{path}'")]
    SkuMismatch { path: String, body: String },
}

/// Errors returned by the product manager.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error(transparent)]
    Validation(#[from] ProductError),
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl From<SkuError> for ManagerError {
    fn from(err: SkuError) -> Self {
        Self::Validation(ProductError::Sku(err))
    }
}
