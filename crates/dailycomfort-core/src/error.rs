//! Error types for Daily Comfort

use thiserror::Error;

/// Main error type for Daily Comfort operations
#[derive(Error, Debug)]
pub enum ComfortError {
    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Message catalog could not be used
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Operation not valid for the current page or component state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl From<serde_json::Error> for ComfortError {
    fn from(err: serde_json::Error) -> Self {
        ComfortError::Serialization(err.to_string())
    }
}

/// Result type alias using ComfortError
pub type ComfortResult<T> = Result<T, ComfortError>;
