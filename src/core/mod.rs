//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the API server,
//! including error handling, configuration, server assembly and the HTTP
//! transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::ApiServer;
pub use transport::{HttpConfig, HttpTransport};
