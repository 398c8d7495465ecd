//! Kogut persistence for Kurnik.
//!
//! This crate defines the storage port consumed by the request handlers
//! and two implementations of it: a Postgres backend for production and
//! an in-memory backend for tests and local development.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod memory;
mod postgres;
mod store;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::KogutStore;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
