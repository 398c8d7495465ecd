//! Storage error types.

use kurnik_types::KogutId;
use thiserror::Error;

/// Errors that can occur during storage operations.
///
/// The two variants are deliberately distinct so callers can map
/// "record missing" and "backend failed" to different responses.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No kogut exists with the given id.
    #[error("kogut {0} not found")]
    NotFound(KogutId),

    /// The database rejected or failed the operation.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
