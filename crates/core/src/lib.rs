//! Functional core of the catalog service.
//!
//! Pure types, validation rules and the storage contract. Nothing in here
//! performs I/O on its own; storage backends and the HTTP surface live in the
//! `catalog` binary crate.

pub mod product;
pub mod serde;
pub mod storage;
