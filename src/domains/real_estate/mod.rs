//! Real estate domain module.
//!
//! This module exposes create, read, update and delete over real estate
//! listings. Each operation binds the request, validates it, issues exactly
//! one document store call and serializes the outcome as JSON.
//!
//! ## Architecture
//!
//! - `model.rs` - Listing types and their store document form
//! - `validation.rs` - Required-field rules
//! - `controller.rs` - One store call per operation, under a deadline
//! - `handlers.rs` - axum handlers and routes
//! - `error.rs` - Error taxonomy and its HTTP mapping

mod controller;
mod error;
mod handlers;
mod model;
mod validation;

pub use controller::{RealEstateController, RealEstateResult};
pub use error::RealEstateError;
pub use handlers::{ApiResponse, COLLECTION_PATH, MEMBER_PATH, router};
pub use model::{RealEstate, RealEstateDetails};
pub use validation::{FieldViolation, ValidationError, ViolationKind, validate_details};
