//! Domains module containing business logic organized by bounded contexts.
//!
//! - **real_estate**: the listing resource and its HTTP handlers
//! - **store**: the document store abstraction and its backends

pub mod real_estate;
pub mod store;
