//! Transport layer for the API server.
//!
//! The server speaks JSON over HTTP. The transport owns the listener, the
//! cross-cutting layers (CORS, request tracing) and graceful shutdown, and
//! delegates routing to the domain routers.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::{HttpTransport, build_router};
