//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` to `RepositoryError` from `catalog_core::storage`.
//!
//! - `SQLITE_CONSTRAINT_PRIMARYKEY` / `SQLITE_CONSTRAINT_UNIQUE` → `Duplicated`
//! - `QueryReturnedNoRows` → `NotFound`
//! - `CannotOpen`, closed connection → `Unavailable`
//! - Row conversion failures → `Encoding`
//! - All other errors → `Query`

use catalog_core::storage::{RecordId, RepositoryError};

/// Maps an error raised while touching the single record `record`.
pub fn map_record_error(err: tokio_rusqlite::Error, record: RecordId) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, _))
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepositoryError::Duplicated(record)
        }
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows) => {
            RepositoryError::NotFound(record)
        }
        _ => map_query_error(err),
    }
}

/// Maps an error that is not tied to a single record, e.g. while listing.
pub fn map_query_error(err: tokio_rusqlite::Error) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, _))
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::Unavailable(format!("cannot open database: {err}"))
        }
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::FromSqlConversionFailure(..)) => {
            RepositoryError::Encoding(err.to_string())
        }
        tokio_rusqlite::Error::Close(_) | tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::Unavailable("connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::Query(err.to_string()),
    }
}
