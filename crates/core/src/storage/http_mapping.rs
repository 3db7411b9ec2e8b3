//! Pure functions for mapping errors to HTTP status codes.
//!
//! Kept free of any HTTP framework types so the mapping can be tested and
//! reused without a server.

use crate::product::ManagerError;

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404, `Duplicated` -> 409
/// - `Unavailable` -> 503
/// - `Query`, `Encoding` -> 500
///
/// # Examples
///
/// ```
/// use catalog_core::product::{Product, Sku};
/// use catalog_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::not_found::<Product>(&Sku::from("FAL-12345678"));
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound(_) => 404,
        RepositoryError::Duplicated(_) => 409,
        RepositoryError::Unavailable(_) => 503,
        RepositoryError::Query(_) | RepositoryError::Encoding(_) => 500,
    }
}

/// Maps a [`ManagerError`] to an HTTP status code.
///
/// Validation failures are always 400; storage failures follow
/// [`repository_error_to_status_code`].
pub fn manager_error_to_status_code(error: &ManagerError) -> u16 {
    match error {
        ManagerError::Validation(_) => 400,
        ManagerError::Storage(repo_error) => repository_error_to_status_code(repo_error),
    }
}
