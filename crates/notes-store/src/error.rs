//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Connection(#[from] sqlx::Error),

    /// Note not found by id.
    #[error("note not found: {0}")]
    NoteNotFound(i64),

    /// Insert rejected because the content already exists.
    #[error("duplicate note content: {0:?}")]
    DuplicateContent(String),

    /// Schema creation error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
