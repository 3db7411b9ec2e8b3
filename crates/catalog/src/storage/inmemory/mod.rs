//! In-memory storage backend.
//!
//! Stores records in a `HashMap` wrapped in `Arc<RwLock<_>>`. Used by the test
//! suite and by the `memory` storage backend, where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::storage::inmemory::InMemoryStorage;
//!
//! let storage = InMemoryStorage::<Sku, Product>::new();
//! ```

mod repository;

pub use repository::InMemoryStorage;
