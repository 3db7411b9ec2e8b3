mod error;
mod manager;
mod types;
mod validation;

pub use error::{ManagerError, ProductError, SkuError};
pub use manager::ProductManager;
pub use types::{Product, Sku};
pub use validation::{
    max_price, min_price, validate_product, MAX_SKU_SUFFIX, MIN_SKU_SUFFIX, SKU_PREFIX,
};
