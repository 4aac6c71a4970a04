//! Store-specific error types.

use thiserror::Error;

/// Result type for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to a document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached or rejected the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A document could not be converted to or from the backend format.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backend returned a document that does not have the expected shape.
    #[error("Corrupt document: {0}")]
    CorruptDocument(String),
}

impl StoreError {
    /// Create a new "unavailable" error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a new "corrupt document" error.
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptDocument(msg.into())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::serialization(e.to_string())
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Unavailable(e.to_string())
    }
}

#[cfg(feature = "mongodb")]
impl From<bson::ser::Error> for StoreError {
    fn from(e: bson::ser::Error) -> Self {
        Self::serialization(e.to_string())
    }
}
