//! Storage-specific errors and their conversion into core error types.

use bodyfolio_core::errors::{Error, StoreError};
use thiserror::Error;

/// Errors raised inside the storage layer. Converted to the storage-agnostic
/// [`StoreError`] before crossing into core or app code.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failure: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("cipher failure")]
    Cipher,

    #[error("vault key file is malformed")]
    BadKey,

    #[error("vault data is truncated")]
    Truncated,
}

pub(crate) fn read_error(collection: &str, err: StorageError) -> Error {
    Error::Store(StoreError::ReadFailed(
        collection.to_string(),
        err.to_string(),
    ))
}

pub(crate) fn write_error(collection: &str, err: StorageError) -> Error {
    Error::Store(StoreError::WriteFailed(
        collection.to_string(),
        err.to_string(),
    ))
}

pub(crate) fn poisoned_lock(what: &str) -> Error {
    Error::Unexpected(format!("{what} lock poisoned"))
}
