//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `DirectoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DirectoryServiceError {
    #[error("campsite not found")]
    UnknownCampsite,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
