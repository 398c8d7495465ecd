//! The storage port.
//!
//! Defines the persistence interface consumed by the request handlers,
//! enabling an in-memory substitute in tests.

use crate::Result;
use async_trait::async_trait;
use kurnik_types::{Kogut, KogutId, KogutInput};

/// Trait for kogut stores.
///
/// Implementations include Postgres and in-memory storage. All methods
/// are safe to call concurrently; each call is a single atomic
/// operation against the backing store.
#[async_trait]
pub trait KogutStore: Send + Sync {
    /// Persists a new kogut and returns it with its assigned id.
    ///
    /// Ids are unique and never reused, even after a delete.
    async fn create(&self, input: KogutInput) -> Result<Kogut>;

    /// Retrieves a kogut by id.
    ///
    /// Returns [`StorageError::NotFound`] when no record has that id.
    ///
    /// [`StorageError::NotFound`]: crate::StorageError::NotFound
    async fn get(&self, id: KogutId) -> Result<Kogut>;

    /// Lists all koguts, ordered by id ascending.
    ///
    /// An empty store yields an empty vec, not an error.
    async fn list(&self) -> Result<Vec<Kogut>>;

    /// Replaces the mutable fields of the kogut with the given id.
    ///
    /// Returns [`StorageError::NotFound`] when no record has that id;
    /// the id itself is never altered.
    ///
    /// [`StorageError::NotFound`]: crate::StorageError::NotFound
    async fn update(&self, id: KogutId, input: KogutInput) -> Result<Kogut>;

    /// Deletes the kogut with the given id.
    ///
    /// Deleting a missing id returns [`StorageError::NotFound`] rather
    /// than succeeding silently, matching get and update.
    ///
    /// [`StorageError::NotFound`]: crate::StorageError::NotFound
    async fn delete(&self, id: KogutId) -> Result<()>;
}
