//! Real estate error types and their HTTP mapping.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, warn};

use super::validation::ValidationError;
use crate::domains::store::{InvalidRecordId, RecordId, StoreError};

/// Errors that can occur while handling a listing request.
#[derive(Debug, Error)]
pub enum RealEstateError {
    /// The request body or path could not be parsed.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The body parsed but required fields are missing.
    #[error(transparent)]
    ValidationFailed(#[from] ValidationError),

    /// No listing has the requested id.
    #[error("Real estate not found: {0}")]
    NotFound(RecordId),

    /// The store operation itself failed.
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    /// The store did not answer before the request deadline.
    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),
}

impl RealEstateError {
    /// Create a new "malformed input" error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_) | Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StoreUnavailable(_) | Self::Timeout(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<InvalidRecordId> for RealEstateError {
    fn from(e: InvalidRecordId) -> Self {
        Self::malformed(e.to_string())
    }
}

impl From<JsonRejection> for RealEstateError {
    fn from(rejection: JsonRejection) -> Self {
        Self::malformed(rejection.body_text())
    }
}

impl From<PathRejection> for RealEstateError {
    fn from(rejection: PathRejection) -> Self {
        Self::malformed(rejection.body_text())
    }
}

/// Every failure becomes a flat `{"error": "..."}` object.
impl IntoResponse for RealEstateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed ({}): {}", status, self);
        } else {
            warn!("Request rejected ({}): {}", status, self);
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
