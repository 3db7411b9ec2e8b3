use std::fmt;

use thiserror::Error;

use super::Record;

/// Identifies one stored record in error messages.
///
/// Renders as `product identified by sku 'FAL-1234567'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordId {
    pub entity: &'static str,
    pub key_name: &'static str,
    pub key: String,
}

impl RecordId {
    pub fn new(entity: &'static str, key_name: &'static str, key: impl Into<String>) -> Self {
        Self {
            entity,
            key_name,
            key: key.into(),
        }
    }

    /// Builds the id of a `V` record from its key.
    pub fn of<V>(key: &V::Key) -> Self
    where
        V: Record,
        V::Key: fmt::Display,
    {
        Self::new(V::ENTITY, V::KEY_NAME, key.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} identified by {} '{}'", self.entity, self.key_name, self.key)
    }
}

/// Errors raised by a storage backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{0} does not exist")]
    NotFound(RecordId),
    #[error("duplicated record: {0} already exists")]
    Duplicated(RecordId),
    /// The backend cannot be reached, e.g. the database file cannot be opened.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage query failed: {0}")]
    Query(String),
    /// A record could not be encoded for storage or decoded back.
    #[error("record encoding failed: {0}")]
    Encoding(String),
}

impl RepositoryError {
    pub fn not_found<V>(key: &V::Key) -> Self
    where
        V: Record,
        V::Key: fmt::Display,
    {
        Self::NotFound(RecordId::of::<V>(key))
    }

    pub fn duplicated<V>(key: &V::Key) -> Self
    where
        V: Record,
        V::Key: fmt::Display,
    {
        Self::Duplicated(RecordId::of::<V>(key))
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
