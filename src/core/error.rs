//! Error types and handling for the API server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for API server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the API server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the real estate domain.
    #[error("Real estate error: {0}")]
    RealEstate(#[from] crate::domains::real_estate::RealEstateError),

    /// Error originating from the document store.
    #[error("Store error: {0}")]
    Store(#[from] crate::domains::store::StoreError),

    /// Error originating from the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
