//! SQLite storage backend implementation.
//!
//! Provides a SQLite-based implementation of `StorageManager` using `rusqlite`
//! for synchronous operations and `tokio-rusqlite` for async wrapping.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteProductStore;
