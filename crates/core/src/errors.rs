//! Core error types for the Bodyfolio application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (I/O, cipher, serialization) are converted to these types by the storage
//! layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Import/export failed: {0}")]
    Transfer(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for vault operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The vault directory could not be opened or initialized.
    #[error("Failed to open vault: {0}")]
    OpenFailed(String),

    /// A collection could not be read back from the vault.
    #[error("Failed to read collection '{0}': {1}")]
    ReadFailed(String, String),

    /// A collection could not be written to the vault.
    #[error("Failed to write collection '{0}': {1}")]
    WriteFailed(String, String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Stored data exists but could not be decoded.
    #[error("Stored data is corrupted: {0}")]
    Corrupted(String),
}

/// Errors from input validation on the create/update paths.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
