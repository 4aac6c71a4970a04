//! Real Estate API Library
//!
//! This crate provides a JSON HTTP API for real estate listings backed by a
//! document store: create, read, update and delete by id.
//!
//! # Architecture
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   server assembly and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **real_estate**: the listing resource, its validation and handlers
//!   - **store**: the document store abstraction and its backends
//!
//! # Example
//!
//! ```rust,no_run
//! use real_estate_api::core::{ApiServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = ApiServer::from_config(config.clone()).await?;
//!     HttpTransport::new(config.http).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{ApiServer, Config, Error, Result};
